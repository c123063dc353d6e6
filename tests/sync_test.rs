use chrono::{TimeZone, Utc};
use git_changelog::domain::TagPattern;
use git_changelog::git::MockRepository;
use git_changelog::github::{create_github_releases, sync_github_releases, MockReleaseService};
use git_changelog::GitChangelogError;

fn pattern() -> TagPattern {
    TagPattern::new(r"[vV]\d\.\d(\.\d){0,2}").unwrap()
}

fn repo_with_tags() -> MockRepository {
    let mut repo = MockRepository::new();
    for id in ["c1", "c2", "c3"] {
        repo.add_commit(id);
    }
    let when = |secs| Utc.timestamp_opt(secs, 0).unwrap();
    repo.add_annotated_tag("v1.0.0", "c1", "v1.0.0\n\nInitial release", when(100));
    repo.add_annotated_tag("v1.1.0-beta", "c2", "Beta notes", when(200));
    repo.add_annotated_tag("v1.1.0", "c3", "v1.1.0\n\nBug fixes", when(300));
    repo.add_lightweight_tag("v1.2.0", "c3");
    repo
}

#[tokio::test]
async fn test_create_missing_releases_oldest_first() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.0.0", Some("already there"));

    let created = create_github_releases(&repo, &service, "acme", "widget", &pattern(), false)
        .await
        .unwrap();
    assert_eq!(created, vec!["v1.1.0-beta", "v1.1.0"]);

    let calls = service.created();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].tag_name, "v1.1.0-beta");
    assert!(calls[0].prerelease);
    assert!(!calls[0].draft);
    assert_eq!(calls[1].name, "v1.1.0");
    assert_eq!(calls[1].body, "v1.1.0\n\nBug fixes");
    assert!(!calls[1].prerelease);
}

#[tokio::test]
async fn test_create_releases_as_drafts() {
    let repo = repo_with_tags();
    let service = MockReleaseService::new();

    create_github_releases(&repo, &service, "acme", "widget", &pattern(), true)
        .await
        .unwrap();

    let calls = service.created();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.draft));
    assert_eq!(calls[0].tag_name, "v1.0.0");
}

#[tokio::test]
async fn test_create_stops_at_first_failure() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.fail_on("v1.1.0-beta");

    let err = create_github_releases(&repo, &service, "acme", "widget", &pattern(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, GitChangelogError::Hosting(_)));

    let calls = service.created();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tag_name, "v1.0.0");
}

#[tokio::test]
async fn test_sync_fills_blank_bodies_only() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.0.0", Some("Hand-written notes"));
    service.add_release(2, "v1.1.0", None);
    service.add_release(3, "v1.1.0-beta", Some("   "));
    service.add_release(4, "v1.2.0", None);
    service.add_release(5, "v9.9.9", None);

    let edited = sync_github_releases(&repo, &service, "acme", "widget", false)
        .await
        .unwrap();
    assert_eq!(edited, vec!["v1.1.0", "v1.1.0-beta"]);

    let calls = service.edited();
    assert_eq!(calls[0].0, 2);
    assert_eq!(calls[0].1.body, "v1.1.0\n\nBug fixes");
    assert!(!calls[0].1.prerelease);
    assert_eq!(calls[1].0, 3);
    assert!(calls[1].1.prerelease);
}

#[tokio::test]
async fn test_sync_stops_at_first_failure() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.1.0", None);
    service.add_release(2, "v1.1.0-beta", None);
    service.fail_on("v1.1.0");

    let err = sync_github_releases(&repo, &service, "acme", "widget", false)
        .await
        .unwrap_err();
    assert!(matches!(err, GitChangelogError::Hosting(_)));
    assert!(service.edited().is_empty());
}

#[tokio::test]
async fn test_sync_without_force_keeps_existing_body() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.0.0", Some("Hand-written notes"));

    let edited = sync_github_releases(&repo, &service, "acme", "widget", false)
        .await
        .unwrap();
    assert!(edited.is_empty());
    assert!(service.edited().is_empty());
}

#[tokio::test]
async fn test_sync_with_force_overwrites() {
    let repo = repo_with_tags();
    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.0.0", Some("Hand-written notes"));

    let edited = sync_github_releases(&repo, &service, "acme", "widget", true)
        .await
        .unwrap();
    assert_eq!(edited, vec!["v1.0.0"]);
    assert_eq!(service.edited()[0].1.body, "v1.0.0\n\nInitial release");
}

#[tokio::test]
async fn test_sync_skips_blank_tag_messages() {
    let mut repo = MockRepository::new();
    repo.add_commit("c1");
    repo.add_annotated_tag("v1.0", "c1", "  \n", Utc.timestamp_opt(0, 0).unwrap());

    let mut service = MockReleaseService::new();
    service.add_release(1, "v1.0", None);

    let edited = sync_github_releases(&repo, &service, "acme", "widget", false)
        .await
        .unwrap();
    assert!(edited.is_empty());
}
