use crate::model::{Job, JobType};

/// A salary filter band parsed from a select-control value.
///
/// `"N+"` means salary >= N, `"min-max"` means min <= salary <= max, and the
/// empty string matches everything. Unparsable bounds become 0 rather than an
/// error, so a malformed control value can never take the filter down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalaryBand {
    #[default]
    Any,
    AtLeast(u64),
    Between(u64, u64),
}

impl SalaryBand {
    pub fn parse(raw: &str) -> SalaryBand {
        let raw = raw.trim();
        if raw.is_empty() {
            return SalaryBand::Any;
        }
        if let Some(min) = raw.strip_suffix('+') {
            return SalaryBand::AtLeast(parse_bound(min));
        }
        match raw.split_once('-') {
            Some((min, max)) => SalaryBand::Between(parse_bound(min), parse_bound(max)),
            None => SalaryBand::AtLeast(parse_bound(raw)),
        }
    }

    pub fn contains(&self, salary: u64) -> bool {
        match *self {
            SalaryBand::Any => true,
            SalaryBand::AtLeast(min) => salary >= min,
            SalaryBand::Between(min, max) => salary >= min && salary <= max,
        }
    }
}

fn parse_bound(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// The full filter state, rebuilt from the current control values on every
/// filter event. Inactive (empty) criteria always pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub job_type: Option<JobType>,
    pub salary: SalaryBand,
}

impl FilterCriteria {
    /// Build criteria from raw control values; the type and salary selects
    /// hand over their option values unchanged.
    pub fn from_controls(search: &str, job_type_code: &str, salary_range: &str) -> FilterCriteria {
        FilterCriteria {
            search: search.to_string(),
            job_type: JobType::from_code(job_type_code),
            salary: SalaryBand::parse(salary_range),
        }
    }

    /// Whether a card stays visible. All active criteria are AND-combined.
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job) && self.matches_type(job) && self.salary.contains(job.salary)
    }

    fn matches_search(&self, job: &Job) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        job.title.to_lowercase().contains(&needle) || job.company.to_lowercase().contains(&needle)
    }

    fn matches_type(&self, job: &Job) -> bool {
        match self.job_type {
            None => true,
            Some(wanted) => job.job_type == Some(wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_job() -> Job {
        serde_json::from_str(
            r#"{
                "id": "j-1",
                "user_id": "u-1",
                "title": "Backend Engineer",
                "company": "Acme",
                "job_type": "full",
                "salary": 150000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_band_parse_forms() {
        assert_eq!(SalaryBand::parse(""), SalaryBand::Any);
        assert_eq!(SalaryBand::parse("  "), SalaryBand::Any);
        assert_eq!(SalaryBand::parse("100000+"), SalaryBand::AtLeast(100_000));
        assert_eq!(
            SalaryBand::parse("50000-100000"),
            SalaryBand::Between(50_000, 100_000)
        );
        assert_eq!(SalaryBand::parse("75000"), SalaryBand::AtLeast(75_000));
    }

    #[test]
    fn test_band_malformed_bounds_default_to_zero() {
        assert_eq!(SalaryBand::parse("abc-xyz"), SalaryBand::Between(0, 0));
        assert_eq!(SalaryBand::parse("abc+"), SalaryBand::AtLeast(0));
        assert!(SalaryBand::parse("abc-xyz").contains(0));
        assert!(!SalaryBand::parse("abc-xyz").contains(1));
    }

    #[test]
    fn test_all_criteria_and_combined() {
        let job = backend_job();
        let criteria = FilterCriteria::from_controls("acme", "", "100000-200000");
        assert!(criteria.matches(&job));

        let criteria = FilterCriteria::from_controls("acme", "remote", "100000-200000");
        assert!(!criteria.matches(&job));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_or_company() {
        let job = backend_job();
        assert!(FilterCriteria::from_controls("ACME", "", "").matches(&job));
        assert!(FilterCriteria::from_controls("backend", "", "").matches(&job));
        assert!(!FilterCriteria::from_controls("frontend", "", "").matches(&job));
        assert!(FilterCriteria::from_controls("", "", "").matches(&job));
    }

    #[test]
    fn test_type_filter_uses_code_not_label() {
        let job = backend_job();
        assert!(FilterCriteria::from_controls("", "full", "").matches(&job));
        // A display label is not a valid code, so the criterion is inactive.
        assert!(FilterCriteria::from_controls("", "Full-time", "").matches(&job));
        assert!(!FilterCriteria::from_controls("", "part", "").matches(&job));
    }

    #[test]
    fn test_untyped_job_fails_active_type_filter() {
        let job: Job = serde_json::from_str(r#"{"id":"j-2","title":"Helper"}"#).unwrap();
        assert!(FilterCriteria::from_controls("", "", "").matches(&job));
        assert!(!FilterCriteria::from_controls("", "full", "").matches(&job));
    }

    #[test]
    fn test_missing_salary_treated_as_zero() {
        let job: Job = serde_json::from_str(r#"{"id":"j-3","title":"Helper"}"#).unwrap();
        assert!(FilterCriteria::from_controls("", "", "0-50000").matches(&job));
        assert!(!FilterCriteria::from_controls("", "", "50000+").matches(&job));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let jobs = vec![
            backend_job(),
            serde_json::from_str::<Job>(r#"{"id":"j-4","title":"Designer","company":"Byte"}"#)
                .unwrap(),
        ];
        let criteria = FilterCriteria::from_controls("acme", "", "");
        let once: Vec<bool> = jobs.iter().map(|j| criteria.matches(j)).collect();
        let twice: Vec<bool> = jobs.iter().map(|j| criteria.matches(j)).collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec![true, false]);
    }
}
