//! Benchmarks for list screen search and sort
//!
//! Rows are filtered and re-sorted on every keystroke, so these run over
//! roster sizes well past a typical organisation.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use paydesk::helpers::{filter_by, EmployeeSortKey, SortConfig, SortDirection};
use paydesk::models::Employee;
use serde_json::json;

const DEPARTMENTS: [&str; 4] = ["Engineering", "Finance & Accounting", "Human Resources", "Sales"];
const TITLES: [&str; 3] = ["Analyst", "Engineer", "Manager"];

/// Generate a roster with spread-out names, departments, and balances
fn generate_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "employeeId": i,
                "firstName": format!("First{:05}", (i * 7919) % count.max(1)),
                "lastName": format!("Last{}", i),
                "email": format!("user{}@example.com", i),
                "hireDate": format!("20{:02}-{:02}-01", 10 + i % 15, 1 + i % 12),
                "departmentName": DEPARTMENTS[i % DEPARTMENTS.len()],
                "jobTitle": TITLES[i % TITLES.len()],
                "leaveBalance": (i % 30) as i32
            }))
            .expect("valid employee fixture")
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_search");

    for size in [100, 1_000, 10_000].iter() {
        let employees = generate_employees(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                let rows = filter_by(black_box(employees), black_box("finance"));
                black_box(rows.len())
            });
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_sort");

    for key in EmployeeSortKey::ALL {
        let employees = generate_employees(5_000);
        let config = SortConfig {
            key,
            direction: SortDirection::Desc,
        };

        group.bench_with_input(BenchmarkId::from_parameter(key.label()), &employees, |b, employees| {
            b.iter(|| {
                let mut rows: Vec<&Employee> = employees.iter().collect();
                config.apply(black_box(&mut rows));
                black_box(rows.first().map(|e| e.employee_id))
            });
        });
    }

    group.finish();
}

/// Search then sort, as the employees screen does per redraw
fn bench_search_then_sort(c: &mut Criterion) {
    let employees = generate_employees(10_000);
    let config = SortConfig::default();

    c.bench_function("employee_search_then_sort_10000", |b| {
        b.iter(|| {
            let mut rows = filter_by(black_box(&employees), "engineer");
            config.apply(&mut rows);
            black_box(rows.len())
        });
    });
}

criterion_group!(benches, bench_search, bench_sort, bench_search_then_sort);
criterion_main!(benches);
