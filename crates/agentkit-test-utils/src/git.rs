//! Git fixtures for registry retrieval tests.

use std::path::Path;

/// Initialise a git repository at `path` and commit everything in it.
///
/// Realism level: **REAL WITH HISTORY**. One commit on the default branch,
/// cloneable through a local path or `file://` URL without network access.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(path: &Path, message: &str) -> git2::Oid {
    let repo = git2::Repository::open(path)
        .or_else(|_| git2::Repository::init(path))
        .unwrap_or_else(|e| panic!("commit_all: failed to open {}: {e}", path.display()));

    let mut index = repo
        .index()
        .unwrap_or_else(|e| panic!("commit_all: failed to read index: {e}"));
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap_or_else(|e| panic!("commit_all: failed to stage files: {e}"));
    index
        .write()
        .unwrap_or_else(|e| panic!("commit_all: failed to write index: {e}"));
    let tree_id = index
        .write_tree()
        .unwrap_or_else(|e| panic!("commit_all: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_all: failed to find tree: {e}"));

    let signature = git2::Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("commit_all: failed to build signature: {e}"));
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_all: failed to commit: {e}"))
}

/// Create a lightweight tag pointing at HEAD.
///
/// # Panics
/// Panics if the repository has no HEAD commit or tagging fails.
pub fn tag_head(path: &Path, tag: &str) {
    let repo = git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("tag_head: failed to open {}: {e}", path.display()));
    let head = repo
        .head()
        .and_then(|head| head.peel(git2::ObjectType::Commit))
        .unwrap_or_else(|e| panic!("tag_head: no HEAD commit: {e}"));
    repo.tag_lightweight(tag, &head, false)
        .unwrap_or_else(|e| panic!("tag_head: failed to create tag {tag}: {e}"));
}
