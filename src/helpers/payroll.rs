/// Net pay before the server confirms it.
pub fn net_salary(base_salary: f64, allowances: f64, deductions: f64) -> f64 {
    base_salary + allowances - deductions
}
