//! Diff document synthesis against real repositories.

mod common;

use common::TestRepo;
use gitai::build_diff_document;
use gitai::diff::blob_hash;

#[test]
fn test_clean_tree_produces_empty_document() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.file_count(), 0);
}

#[test]
fn test_untracked_file_block() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");
    repo.write("notes.txt", "a\nb\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    let expected = format!(
        "diff --git a/notes.txt b/notes.txt\n\
         new file mode 100644\n\
         index 0000000..{}\n\
         --- /dev/null\n\
         +++ b/notes.txt\n\
         @@ -0,0 +1,2 @@\n\
         +a\n\
         +b\n",
        blob_hash(b"a\nb\n")
    );
    assert_eq!(doc.as_str(), expected);
}

#[test]
fn test_modified_file_block() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");
    repo.write("README.md", "hello\nworld\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    let expected = format!(
        "diff --git a/README.md b/README.md\n\
         index ce013625030ba8dba906f756967f9e9ca394464a..{} 100644\n\
         --- a/README.md\n\
         +++ b/README.md\n\
         @@ -1,1 +1,2 @@\n \
         hello\n\
         +world\n",
        blob_hash(b"hello\nworld\n")
    );
    assert_eq!(doc.as_str(), expected);
}

#[test]
fn test_deleted_file_block() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.write("old.txt", "x\ny\n");
    repo.commit_all("initial");
    repo.remove("old.txt");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert_eq!(doc.file_count(), 1);
    assert!(doc.as_str().starts_with("diff --git a/old.txt b/old.txt\ndeleted file mode 100644\n"));
    assert!(doc.as_str().contains("+++ /dev/null\n@@ -1,2 +0,0 @@\n-x\n-y\n"));
}

#[test]
fn test_staged_new_file_is_a_new_file_block() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");
    repo.write("src/lib.rs", "pub fn f() {}\n");
    {
        let mut index = repo.repo.index().unwrap();
        index.add_path(std::path::Path::new("src/lib.rs")).unwrap();
        index.write().unwrap();
    }

    let doc = build_diff_document(&repo.open()).unwrap();
    assert!(doc.as_str().starts_with("diff --git a/src/lib.rs b/src/lib.rs\nnew file mode 100644\n"));
    assert!(doc.as_str().ends_with("@@ -0,0 +1,1 @@\n+pub fn f() {}\n"));
}

#[test]
fn test_nested_untracked_files_are_listed_individually() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");
    repo.write("docs/a.md", "a\n");
    repo.write("docs/b.md", "b\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert_eq!(doc.file_count(), 2);
    assert!(doc.as_str().contains("diff --git a/docs/a.md b/docs/a.md\n"));
    assert!(doc.as_str().contains("diff --git a/docs/b.md b/docs/b.md\n"));
}

#[test]
fn test_line_ending_only_change_is_reported() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\nworld\n");
    repo.commit_all("initial");
    repo.write("README.md", "hello\r\nworld\r\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert_eq!(doc.file_count(), 1);
    assert!(doc.as_str().ends_with("@@ -1,2 +1,2 @@\n hello\n world\n"));
}

#[test]
fn test_added_trailing_newline_is_reported() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello");
    repo.commit_all("initial");
    repo.write("README.md", "hello\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    let expected = format!(
        "diff --git a/README.md b/README.md\n\
         index {}..{} 100644\n\
         --- a/README.md\n\
         +++ b/README.md\n\
         @@ -1,1 +1,1 @@\n \
         hello\n",
        blob_hash(b"hello"),
        blob_hash(b"hello\n")
    );
    assert_eq!(doc.as_str(), expected);
}

#[test]
fn test_repository_without_commits() {
    let repo = TestRepo::new();
    repo.write("first.txt", "one\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert_eq!(doc.file_count(), 1);
    assert!(doc.as_str().contains("new file mode 100644\nindex 0000000.."));
}

#[test]
fn test_ignored_files_are_excluded() {
    let repo = TestRepo::new();
    repo.write(".gitignore", "target/\n");
    repo.commit_all("initial");
    repo.write("target/out.bin", "binary\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_untracked_nested_repository_is_skipped() {
    let repo = TestRepo::new();
    repo.write("README.md", "hello\n");
    repo.commit_all("initial");
    git2::Repository::init(repo.path().join("vendor")).unwrap();
    repo.write("vendor/x.txt", "nested\n");
    repo.write("notes.txt", "n\n");

    let doc = build_diff_document(&repo.open()).unwrap();
    assert_eq!(doc.file_count(), 1);
    assert!(doc.as_str().starts_with("diff --git a/notes.txt b/notes.txt\n"));
    assert!(!doc.as_str().contains("vendor"));
}
