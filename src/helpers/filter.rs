//! Client-side search and sort for list screens.

use std::cmp::Ordering;

use crate::models::{Department, Employee, JobRole, LeaveRequest};

/// Fields a list screen searches over.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match; `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Items whose search fields contain `term`, ignoring case.
///
/// The term is trimmed first, so a blank or whitespace-only term keeps
/// everything. Order is preserved.
pub fn filter_by<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.first_name.as_str(), self.last_name.as_str()];
        fields.extend(self.email.as_deref());
        fields.extend(self.department_name.as_deref());
        fields.extend(self.job_title.as_deref());
        fields
    }
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.department_name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl Searchable for JobRole {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.job_title.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.leave_type.as_str()];
        fields.extend(self.reason.as_deref());
        fields.extend(self.ai_message.as_deref());
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Sortable employee columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSortKey {
    #[default]
    FirstName,
    Department,
    JobTitle,
    HireDate,
    LeaveBalance,
}

impl EmployeeSortKey {
    pub const ALL: [EmployeeSortKey; 5] = [
        EmployeeSortKey::FirstName,
        EmployeeSortKey::Department,
        EmployeeSortKey::JobTitle,
        EmployeeSortKey::HireDate,
        EmployeeSortKey::LeaveBalance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeSortKey::FirstName => "Name",
            EmployeeSortKey::Department => "Department",
            EmployeeSortKey::JobTitle => "Job Title",
            EmployeeSortKey::HireDate => "Hire Date",
            EmployeeSortKey::LeaveBalance => "Leave Balance",
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        fn text(value: &Option<String>) -> Option<String> {
            value.as_ref().map(|s| s.to_lowercase())
        }
        match self {
            EmployeeSortKey::FirstName => a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()),
            EmployeeSortKey::Department => text(&a.department_name).cmp(&text(&b.department_name)),
            EmployeeSortKey::JobTitle => text(&a.job_title).cmp(&text(&b.job_title)),
            EmployeeSortKey::HireDate => a.hire_date.cmp(&b.hire_date),
            EmployeeSortKey::LeaveBalance => a.leave_balance.cmp(&b.leave_balance),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: EmployeeSortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Selecting the active column while ascending flips to descending;
    /// any other selection sorts ascending by the chosen column.
    pub fn toggle(self, key: EmployeeSortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    /// Stable sort of a filtered view.
    pub fn apply(&self, employees: &mut [&Employee]) {
        employees.sort_by(|a, b| {
            let ordering = self.key.compare(a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, first: &str, dept: Option<&str>, balance: i32) -> Employee {
        Employee {
            employee_id: id,
            user_id: None,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: None,
            date_of_birth: None,
            phone_number: None,
            address: None,
            hire_date: None,
            department_id: None,
            department_name: dept.map(String::from),
            job_id: None,
            job_title: None,
            leave_balance: Some(balance),
            job_role: None,
        }
    }

    #[test]
    fn test_blank_term_keeps_all() {
        let list = vec![employee(1, "A", None, 1), employee(2, "B", None, 2)];
        assert_eq!(filter_by(&list, "  ").len(), 2);
    }

    #[test]
    fn test_case_insensitive_over_optional_fields() {
        let list = vec![
            employee(1, "Asha", Some("Finance & Accounting"), 3),
            employee(2, "Ravi", Some("Engineering"), 3),
            employee(3, "Kiran", None, 3),
        ];
        let found = filter_by(&list, "FINANCE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employee_id, 1);
        assert_eq!(filter_by(&list, "doe").len(), 3);
    }

    #[test]
    fn test_toggle_rules() {
        let config = SortConfig::default();
        assert_eq!(config.key, EmployeeSortKey::FirstName);
        assert_eq!(config.direction, SortDirection::Asc);

        let flipped = config.toggle(EmployeeSortKey::FirstName);
        assert_eq!(flipped.direction, SortDirection::Desc);

        let back = flipped.toggle(EmployeeSortKey::FirstName);
        assert_eq!(back.direction, SortDirection::Asc);

        let other = flipped.toggle(EmployeeSortKey::LeaveBalance);
        assert_eq!(other.key, EmployeeSortKey::LeaveBalance);
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn test_apply_sorts_both_ways() {
        let list = vec![
            employee(1, "carla", None, 5),
            employee(2, "Amir", None, 9),
            employee(3, "Bela", None, 1),
        ];
        let mut view: Vec<&Employee> = list.iter().collect();
        SortConfig::default().apply(&mut view);
        let ids: Vec<i64> = view.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let by_balance_desc = SortConfig::default()
            .toggle(EmployeeSortKey::LeaveBalance)
            .toggle(EmployeeSortKey::LeaveBalance);
        by_balance_desc.apply(&mut view);
        let ids: Vec<i64> = view.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
