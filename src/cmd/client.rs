use crate::{
    conf::settings,
    pkg::{
        client::JobBoard,
        internal::adaptors::jobs::spec::{JobEntry, JobPage},
    },
    prelude::Result,
};

pub async fn login(email: &str, password: &str) -> Result<()> {
    let mut board = JobBoard::from_settings(&settings)?;
    let out = board.login(email, password).await?;
    println!("{}", out.message);
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut board = JobBoard::from_settings(&settings)?;
    let was_logged_in = board.session.is_logged_in();
    board.logout()?;
    if was_logged_in {
        println!("Logged out successfully");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Stay,
    To(u32),
    By(i64),
}

impl PageNav {
    /// An explicit page wins over `--next`/`--prev`.
    pub fn from_flags(page: Option<u32>, next: bool, prev: bool) -> Self {
        match (page, next, prev) {
            (Some(p), _, _) => PageNav::To(p),
            (None, true, false) => PageNav::By(1),
            (None, false, true) => PageNav::By(-1),
            _ => PageNav::Stay,
        }
    }
}

pub async fn jobs(nav: PageNav, limit: Option<u32>, search: Option<&str>) -> Result<()> {
    let mut board = JobBoard::from_settings(&settings)?;
    if let Some(limit) = limit {
        board.session.limit = limit.max(1);
    }
    if let Some(term) = search {
        board.session.search(term);
    }
    match nav {
        PageNav::Stay => {}
        PageNav::To(p) => board.session.go_to(p),
        PageNav::By(delta) => board.session.change_page(delta),
    }
    let page = board.fetch_jobs().await?;
    print!("{}", render_page(&page));
    Ok(())
}

pub async fn job(id: u32) -> Result<()> {
    let mut board = JobBoard::from_settings(&settings)?;
    let job = board.fetch_job(id).await?;
    print!("{}", render_job(&job));
    Ok(())
}

fn render_page(page: &JobPage) -> String {
    let mut out = String::new();
    if page.jobs.is_empty() {
        out.push_str("No jobs found\n");
    }
    for j in &page.jobs {
        out.push_str(&format!(
            "#{:<4} {} @ {} | {} | {} | {} | posted {}\n",
            j.id, j.title, j.company, j.location, j.salary, j.job_type, j.posted_date
        ));
    }
    let p = &page.pagination;
    out.push_str(&format!(
        "Page {} of {} ({} jobs)\n",
        p.current_page,
        p.total_pages.max(1),
        p.total_jobs
    ));
    out
}

fn render_job(job: &JobEntry) -> String {
    let mut out = format!(
        "{}\n{}\n{} | {} | {} | posted {}\n\n{}\n\nRequirements:\n",
        job.title,
        job.company,
        job.location,
        job.salary,
        job.job_type,
        job.posted_date,
        job.description
    );
    for r in &job.requirements {
        out.push_str(&format!("  - {}\n", r));
    }
    out
}
