// Shared helpers for integration tests that need a real git repository
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SEP_2020: i64 = 1_600_000_000; // 2020-09-13
pub const JAN_2021: i64 = 1_610_000_000; // 2021-01-07
pub const MAY_2021: i64 = 1_620_000_000; // 2021-05-03

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    counter: std::cell::Cell<u32>,
}

fn signature(secs: i64) -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(secs, 0))
        .expect("Could not build signature")
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo {
            dir,
            repo,
            counter: std::cell::Cell::new(0),
        }
    }

    /// Path of the `.git` directory
    pub fn git_dir(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    fn write_tree(&self) -> Oid {
        let n = self.counter.get() + 1;
        self.counter.set(n);

        let content_path = self.dir.path().join("README.md");
        fs::write(&content_path, format!("revision {}\n", n)).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");
        index.write_tree().expect("Could not write tree")
    }

    /// Commit on HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let tree_id = self.write_tree();
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = signature(SEP_2020);

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    /// Commit that no ref points at
    pub fn dangling_commit(&self, message: &str) -> Oid {
        let tree_id = self.write_tree();
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = signature(SEP_2020);

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[])
            .expect("Could not create commit")
    }

    pub fn annotated_tag(&self, name: &str, target: Oid, message: &str, secs: i64) {
        let object = self.repo.find_object(target, None).expect("No object");
        self.repo
            .tag(name, &object, &signature(secs), message, false)
            .expect("Could not create annotated tag");
    }

    pub fn lightweight_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).expect("No object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create lightweight tag");
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).expect("Could not add remote");
    }
}
