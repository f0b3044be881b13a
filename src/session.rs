//! Submission cycles: profile fetch, then repository fetch, then render.
//!
//! Every submit opens a numbered cycle. Results carrying an older cycle
//! number than the latest one are dropped, so a slow earlier lookup can
//! never overwrite a newer one.

use crate::error::{LookupError, Result};
use crate::github::GitHubApi;
use crate::stats;
use crate::types::{LanguageCount, Profile, RepositorySummary};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleId(u64);

pub struct Session<A> {
    api: A,
    phase: Phase,
    profile: Option<Profile>,
    repos: Vec<RepositorySummary>,
    latest: u64,
}

impl<A: GitHubApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            phase: Phase::Idle,
            profile: None,
            repos: Vec::new(),
            latest: 0,
        }
    }

    pub fn submit(&mut self, input: &str) -> Result<()> {
        self.submit_with(input, |_| {})
    }

    /// Runs one full cycle. `on_loading` is called once the cycle is in
    /// flight, before any request goes out.
    ///
    /// Empty input is rejected without touching state. Failures leave the
    /// previously shown data in place and return the session to idle.
    pub fn submit_with(&mut self, input: &str, mut on_loading: impl FnMut(&Self)) -> Result<()> {
        let handle = input.trim();
        if handle.is_empty() {
            debug!("empty handle submitted, ignoring");
            return Err(LookupError::EmptyHandle);
        }

        let cycle = self.begin();
        on_loading(self);

        let profile = match self.api.fetch_profile(handle) {
            Ok(profile) => profile,
            Err(e) => {
                self.fail(cycle, &e);
                return Err(e);
            }
        };
        self.accept_profile(cycle, profile);

        let repos = match self.api.fetch_recent_repos(handle) {
            Ok(repos) => repos,
            Err(e) => {
                self.fail(cycle, &e);
                return Err(e);
            }
        };
        self.accept_repos(cycle, repos);

        info!(handle, repos = self.repos.len(), "lookup complete");
        Ok(())
    }

    pub fn begin(&mut self) -> CycleId {
        self.latest += 1;
        self.phase = Phase::Loading;
        debug!(cycle = self.latest, "cycle started");
        CycleId(self.latest)
    }

    pub fn is_current(&self, cycle: CycleId) -> bool {
        cycle.0 == self.latest
    }

    pub fn accept_profile(&mut self, cycle: CycleId, profile: Profile) -> bool {
        if !self.is_current(cycle) {
            debug!(cycle = cycle.0, latest = self.latest, "dropping stale profile");
            return false;
        }
        self.profile = Some(profile);
        true
    }

    pub fn accept_repos(&mut self, cycle: CycleId, repos: Vec<RepositorySummary>) -> bool {
        if !self.is_current(cycle) {
            debug!(cycle = cycle.0, latest = self.latest, "dropping stale repositories");
            return false;
        }
        debug!(
            ids = ?repos.iter().map(|r| r.id).collect::<Vec<_>>(),
            "repositories accepted"
        );
        self.repos = repos;
        self.phase = Phase::Populated;
        true
    }

    pub fn fail(&mut self, cycle: CycleId, err: &LookupError) -> bool {
        if !self.is_current(cycle) {
            return false;
        }
        warn!(error = %err, "lookup failed");
        self.phase = Phase::Idle;
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn repos(&self) -> &[RepositorySummary] {
        &self.repos
    }

    /// Recomputed from the current batch on every call.
    pub fn language_counts(&self) -> Vec<LanguageCount> {
        stats::aggregate(&self.repos)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    pub(crate) fn profile(login: &str, public_repos: u32) -> Profile {
        serde_json::from_value(serde_json::json!({
            "login": login,
            "created_at": "2011-01-25T18:44:36Z",
            "public_repos": public_repos,
        }))
        .unwrap()
    }

    pub(crate) fn repo(id: u64, language: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{}", id),
            html_url: format!("https://github.com/octocat/repo-{}", id),
            description: Some(format!("Repository number {}", id)),
            language: language.map(str::to_string),
        }
    }

    /// Canned responses plus a log of every request made.
    pub(crate) struct FakeApi {
        pub profile: RefCell<Result<Profile>>,
        pub repos: RefCell<Result<Vec<RepositorySummary>>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub(crate) fn new(profile: Result<Profile>, repos: Result<Vec<RepositorySummary>>) -> Self {
            Self {
                profile: RefCell::new(profile),
                repos: RefCell::new(repos),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl GitHubApi for &FakeApi {
        fn fetch_profile(&self, handle: &str) -> Result<Profile> {
            self.calls.borrow_mut().push(format!("profile:{}", handle));
            self.profile.borrow().clone()
        }

        fn fetch_recent_repos(&self, handle: &str) -> Result<Vec<RepositorySummary>> {
            self.calls.borrow_mut().push(format!("repos:{}", handle));
            self.repos.borrow().clone()
        }
    }

    fn octocat_repos() -> Vec<RepositorySummary> {
        vec![
            repo(1, Some("JavaScript")),
            repo(2, Some("JavaScript")),
            repo(3, Some("Python")),
            repo(4, None),
            repo(5, Some("JavaScript")),
        ]
    }

    fn not_found(handle: &str) -> LookupError {
        LookupError::NotFound {
            handle: handle.to_string(),
            status: 404,
        }
    }

    #[test]
    fn test_octocat_cycle() {
        let api = FakeApi::new(Ok(profile("octocat", 8)), Ok(octocat_repos()));
        let mut session = Session::new(&api);

        session.submit("  octocat ").unwrap();

        assert_eq!(session.phase(), Phase::Populated);
        assert_eq!(session.profile().unwrap().public_repos, 8);
        assert_eq!(session.repos().len(), 5);
        assert_eq!(
            session.language_counts(),
            vec![
                LanguageCount { name: "JavaScript".into(), value: 3 },
                LanguageCount { name: "Python".into(), value: 1 },
            ]
        );
        assert_eq!(*api.calls.borrow(), vec!["profile:octocat", "repos:octocat"]);
    }

    #[test]
    fn test_loading_hook_sees_busy_session() {
        let api = FakeApi::new(Ok(profile("octocat", 8)), Ok(octocat_repos()));
        let mut session = Session::new(&api);
        let mut seen = Vec::new();

        session
            .submit_with("octocat", |s| {
                seen.push(s.phase());
                assert!(api.calls.borrow().is_empty());
            })
            .unwrap();

        assert_eq!(seen, vec![Phase::Loading]);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_empty_input_makes_no_request() {
        let api = FakeApi::new(Ok(profile("octocat", 8)), Ok(octocat_repos()));
        let mut session = Session::new(&api);

        assert_eq!(session.submit("   "), Err(LookupError::EmptyHandle));
        assert_eq!(session.submit(""), Err(LookupError::EmptyHandle));

        assert!(api.calls.borrow().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_empty_input_keeps_populated_view() {
        let api = FakeApi::new(Ok(profile("octocat", 8)), Ok(octocat_repos()));
        let mut session = Session::new(&api);
        session.submit("octocat").unwrap();

        assert!(session.submit("").is_err());
        assert_eq!(session.phase(), Phase::Populated);
        assert_eq!(session.repos().len(), 5);
    }

    #[test]
    fn test_profile_failure_on_first_submit() {
        let api = FakeApi::new(Err(not_found("ghost")), Ok(octocat_repos()));
        let mut session = Session::new(&api);

        assert_eq!(session.submit("ghost"), Err(not_found("ghost")));

        assert_eq!(*api.calls.borrow(), vec!["profile:ghost"]);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.profile().is_none());
        assert!(session.repos().is_empty());
    }

    #[test]
    fn test_profile_failure_keeps_previous_profile() {
        let api = FakeApi::new(Ok(profile("octocat", 8)), Ok(octocat_repos()));
        let mut session = Session::new(&api);
        session.submit("octocat").unwrap();

        *api.profile.borrow_mut() = Err(LookupError::transport("connection reset"));
        api.calls.borrow_mut().clear();
        assert!(matches!(session.submit("hubot"), Err(LookupError::Transport { .. })));

        assert_eq!(*api.calls.borrow(), vec!["profile:hubot"]);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.profile().unwrap().login, "octocat");
        assert_eq!(session.repos().len(), 5);
    }

    #[test]
    fn test_repo_failure_keeps_new_profile_and_old_repos() {
        let api = FakeApi::new(Ok(profile("hubot", 3)), Err(not_found("hubot")));
        let mut session = Session::new(&api);
        let cycle = session.begin();
        session.accept_repos(cycle, vec![repo(9, Some("Ruby"))]);

        assert!(session.submit("hubot").is_err());

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.profile().unwrap().login, "hubot");
        assert_eq!(session.repos(), &[repo(9, Some("Ruby"))]);
        assert_eq!(session.language_counts().len(), 1);
    }

    #[test]
    fn test_stale_cycle_results_are_dropped() {
        let api = FakeApi::new(Ok(profile("unused", 0)), Ok(vec![]));
        let mut session = Session::new(&api);

        let first = session.begin();
        let second = session.begin();
        assert!(first < second);

        assert!(session.accept_profile(second, profile("newer", 1)));
        assert!(session.accept_repos(second, vec![repo(1, Some("Rust"))]));

        assert!(!session.accept_profile(first, profile("older", 2)));
        assert!(!session.accept_repos(first, vec![repo(2, Some("Go"))]));
        assert!(!session.fail(first, &not_found("older")));

        assert_eq!(session.phase(), Phase::Populated);
        assert_eq!(session.profile().unwrap().login, "newer");
        assert_eq!(
            session.language_counts(),
            vec![LanguageCount { name: "Rust".into(), value: 1 }]
        );
    }
}
