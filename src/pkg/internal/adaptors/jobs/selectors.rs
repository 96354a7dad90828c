use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobPage, Pagination};

/// Page request after query validation; both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest { page: 1, limit: 10 }
    }
}

pub struct JobSelector<'a> {
    jobs: &'a [JobEntry],
}

impl<'a> JobSelector<'a> {
    pub fn new(jobs: &'a [JobEntry]) -> Self {
        JobSelector { jobs }
    }

    pub fn get_by_id(&self, id: u32) -> Option<&'a JobEntry> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Case-insensitive substring match on title or company, in collection order.
    pub fn search(&self, term: Option<&str>) -> Vec<&'a JobEntry> {
        match term.map(str::to_lowercase).filter(|t| !t.is_empty()) {
            Some(needle) => self
                .jobs
                .iter()
                .filter(|j| {
                    j.title.to_lowercase().contains(&needle)
                        || j.company.to_lowercase().contains(&needle)
                })
                .collect(),
            None => self.jobs.iter().collect(),
        }
    }

    pub fn list(&self, term: Option<&str>, req: PageRequest) -> JobPage {
        let matched = self.search(term);
        let total = matched.len();
        let limit = req.limit.max(1) as usize;
        let total_pages = total.div_ceil(limit);
        let start = (req.page.max(1) as usize - 1).saturating_mul(limit);
        let jobs = matched
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        JobPage {
            jobs,
            pagination: Pagination {
                current_page: req.page,
                total_pages: total_pages as u32,
                total_jobs: total as u32,
                limit: req.limit,
                has_next_page: (req.page as usize) < total_pages,
                has_prev_page: req.page > 1,
            },
        }
    }
}

/// Fails on the first id that appears twice.
pub fn ensure_unique_ids(jobs: &[JobEntry]) -> Result<(), u32> {
    let mut seen = std::collections::HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id) {
            return Err(job.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{JobSelector, PageRequest, ensure_unique_ids};
    use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

    fn job(id: u32, title: &str, company: &str) -> JobEntry {
        JobEntry {
            id,
            title: title.into(),
            company: company.into(),
            location: "Remote".into(),
            salary: "$100k".into(),
            job_type: "Full-time".into(),
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: String::new(),
            requirements: vec![],
        }
    }

    fn numbered(n: u32) -> Vec<JobEntry> {
        (1..=n)
            .map(|i| job(i, &format!("Role {i}"), &format!("Company {i}")))
            .collect()
    }

    #[test]
    fn last_page_is_partial() {
        let jobs = numbered(25);
        let page = JobSelector::new(&jobs).list(None, PageRequest { page: 3, limit: 10 });
        let ids: Vec<u32> = page.jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_jobs, 25);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn page_size_and_total_pages_hold_for_every_combination() {
        let jobs = numbered(25);
        let selector = JobSelector::new(&jobs);
        for limit in 1..=30 {
            for page in 1..=30 {
                let res = selector.list(None, PageRequest { page, limit });
                assert!(res.jobs.len() <= limit as usize);
                assert_eq!(res.pagination.total_pages, 25u32.div_ceil(limit));
                if page > res.pagination.total_pages {
                    assert!(res.jobs.is_empty());
                    assert!(!res.pagination.has_next_page);
                }
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_or_company() {
        let jobs = vec![
            job(1, "Rust Engineer", "Acme"),
            job(2, "Designer", "RustWorks"),
            job(3, "Accountant", "Ledger Co"),
        ];
        let selector = JobSelector::new(&jobs);
        let ids: Vec<u32> = selector.search(Some("rUsT")).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let ids: Vec<u32> = selector.search(Some("dger")).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(selector.search(Some("")).len(), 3);
    }

    #[test]
    fn no_match_yields_zero_pages() {
        let jobs = numbered(5);
        let page = JobSelector::new(&jobs).list(Some("nowhere"), PageRequest::default());
        assert!(page.jobs.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(page.pagination.total_jobs, 0);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let jobs = numbered(3);
        let page = JobSelector::new(&jobs).list(
            None,
            PageRequest {
                page: u32::MAX,
                limit: u32::MAX,
            },
        );
        assert!(page.jobs.is_empty());
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn lookup_is_exact() {
        let jobs = numbered(12);
        let selector = JobSelector::new(&jobs);
        assert_eq!(selector.get_by_id(12).map(|j| j.id), Some(12));
        assert!(selector.get_by_id(13).is_none());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut jobs = numbered(3);
        assert_eq!(ensure_unique_ids(&jobs), Ok(()));
        jobs.push(job(2, "Again", "Dup"));
        assert_eq!(ensure_unique_ids(&jobs), Err(2));
    }
}
