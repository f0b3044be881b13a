use crate::types::{LanguageCount, RepositorySummary};

/// Counts repositories per primary language.
///
/// Repositories without a language are skipped. Languages appear in the
/// order they are first seen, so the chart is stable for a given batch.
pub fn aggregate(repos: &[RepositorySummary]) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();

    for language in repos.iter().filter_map(|repo| repo.language.as_deref()) {
        if language.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|entry| entry.name == language) {
            Some(entry) => entry.value += 1,
            None => counts.push(LanguageCount {
                name: language.to_string(),
                value: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, language: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{}", id),
            html_url: format!("https://github.com/octocat/repo-{}", id),
            description: None,
            language: language.map(str::to_string),
        }
    }

    fn lc(name: &str, value: u32) -> LanguageCount {
        LanguageCount {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_order_not_count_order() {
        let repos = vec![
            repo(1, Some("Python")),
            repo(2, Some("JavaScript")),
            repo(3, Some("JavaScript")),
            repo(4, Some("Rust")),
            repo(5, Some("JavaScript")),
        ];
        assert_eq!(
            aggregate(&repos),
            vec![lc("Python", 1), lc("JavaScript", 3), lc("Rust", 1)]
        );
    }

    #[test]
    fn test_missing_and_empty_languages_are_dropped() {
        let repos = vec![
            repo(1, None),
            repo(2, Some("")),
            repo(3, Some("Go")),
        ];
        let counts = aggregate(&repos);
        assert_eq!(counts, vec![lc("Go", 1)]);
        let total: u32 = counts.iter().map(|c| c.value).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_only_unlabelled_repos() {
        let repos = vec![repo(1, None), repo(2, Some(""))];
        assert!(aggregate(&repos).is_empty());
    }

    #[test]
    fn test_repeatable() {
        let repos = vec![
            repo(1, Some("C")),
            repo(2, Some("Zig")),
            repo(3, Some("C")),
        ];
        let first = aggregate(&repos);
        let second = aggregate(&repos);
        assert_eq!(first, second);
        assert!(first.len() <= 2);
    }
}
