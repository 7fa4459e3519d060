use fanhash::engine::{
    FileOperation, HashOp, copy_and_hash, ensure_dir_exists, hash_file, list_regular_files,
};
use fanhash::{DigestAlgo, FileResult, RunError, RunOpts};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

fn sorted(mut v: Vec<PathBuf>) -> Vec<PathBuf> {
    v.sort();
    v
}

// --- list_regular_files ---

#[test]
fn test_list_only_top_level_regular_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"abc").unwrap();
    fs::write(dir.path().join("b.bin"), b"").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("nested.txt"), b"x").unwrap();

    let files = sorted(list_regular_files(dir.path()).unwrap());
    assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.bin")]);
}

#[cfg(unix)]
#[test]
fn test_list_skips_symlinks() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("real"), b"data").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
    std::os::unix::fs::symlink("/nonexistent/target", dir.path().join("dangling")).unwrap();

    let files = list_regular_files(dir.path()).unwrap();
    assert_eq!(files, vec![PathBuf::from("real")]);
}

#[test]
fn test_list_empty_dir() {
    let dir = TempDir::new().unwrap();
    assert!(list_regular_files(dir.path()).unwrap().is_empty());
}

#[test]
fn test_list_missing_dir_is_enumeration_error() {
    let dir = TempDir::new().unwrap();
    let err = list_regular_files(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, RunError::Enumeration { .. }));
}

// --- ensure_dir_exists ---

#[test]
fn test_ensure_dir_exists() {
    let dir = TempDir::new().unwrap();
    assert!(ensure_dir_exists(dir.path()).is_ok());

    let file = dir.path().join("f");
    fs::write(&file, b"").unwrap();
    assert!(matches!(ensure_dir_exists(&file), Err(RunError::Config(_))));
    assert!(matches!(
        ensure_dir_exists(&dir.path().join("nope")),
        Err(RunError::Config(_))
    ));
}

// --- hash_file / copy_and_hash ---

#[test]
fn test_hash_file_known_digests() {
    let dir = TempDir::new().unwrap();
    let abc = dir.path().join("abc");
    let empty = dir.path().join("empty");
    fs::write(&abc, b"abc").unwrap();
    fs::write(&empty, b"").unwrap();

    assert_eq!(hash_file(&abc, DigestAlgo::Sha1).unwrap(), ABC_SHA1);
    assert_eq!(hash_file(&empty, DigestAlgo::Sha1).unwrap(), EMPTY_SHA1);
    assert_eq!(
        hash_file(&abc, DigestAlgo::Blake3).unwrap(),
        blake3::hash(b"abc").to_hex().to_string()
    );
}

#[test]
fn test_hash_file_missing_is_file_io_error() {
    let dir = TempDir::new().unwrap();
    let err = hash_file(&dir.path().join("missing"), DigestAlgo::Sha1).unwrap_err();
    match err {
        RunError::FileIo { op, .. } => assert_eq!(op, "hash"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_copy_and_hash_round_trip() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src.bin");
    let dest = dir.path().join("dest.bin");
    let data: Vec<u8> = (0..300_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&src, &data).unwrap();

    let (bytes, digest) = copy_and_hash(&src, &dest, DigestAlgo::Sha1).unwrap();
    assert_eq!(bytes, data.len() as u64);
    assert_eq!(fs::read(&dest).unwrap(), data);
    assert_eq!(hash_file(&dest, DigestAlgo::Sha1).unwrap(), digest);
    assert_eq!(hash_file(&src, DigestAlgo::Sha1).unwrap(), digest);
}

#[test]
fn test_copy_and_hash_truncates_existing_dest() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::write(&src, b"abc").unwrap();
    fs::write(&dest, b"much longer previous content").unwrap();

    let (bytes, digest) = copy_and_hash(&src, &dest, DigestAlgo::Sha1).unwrap();
    assert_eq!(bytes, 3);
    assert_eq!(digest, ABC_SHA1);
    assert_eq!(fs::read(&dest).unwrap(), b"abc");
}

#[test]
fn test_copy_and_hash_unwritable_dest_is_error() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::write(&src, b"abc").unwrap();
    // A directory where the destination file should go cannot be created as a file.
    let dest = dir.path().join("taken");
    fs::create_dir(&dest).unwrap();

    let err = copy_and_hash(&src, &dest, DigestAlgo::Sha1).unwrap_err();
    match err {
        RunError::FileIo { op, path, .. } => {
            assert_eq!(op, "copy");
            assert_eq!(path, dest);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// --- operations and result lines ---

#[test]
fn test_hash_op_result_line() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"abc").unwrap();
    let op = HashOp::new(dir.path(), DigestAlgo::Sha1);
    let result = op.apply(&PathBuf::from("a.txt")).unwrap();
    assert_eq!(result.to_string(), format!("a.txt: {ABC_SHA1}"));
    assert_eq!(result.bytes(), None);
}

#[test]
fn test_copied_result_line() {
    let result = FileResult::Copied {
        name: PathBuf::from("a.txt"),
        bytes: 3,
        digest: ABC_SHA1.to_string(),
    };
    assert_eq!(result.to_string(), format!("a.txt 3 {ABC_SHA1}"));
    assert_eq!(result.digest(), ABC_SHA1);
    assert_eq!(result.name(), PathBuf::from("a.txt").as_path());
}

#[test]
fn test_run_opts_builders() {
    let opts = RunOpts::copy("/s", "/d")
        .with_workers(4)
        .with_algo(DigestAlgo::Blake3);
    assert_eq!(opts.workers, 4);
    assert_eq!(opts.algo, DigestAlgo::Blake3);
    assert_eq!(RunOpts::hash("/s").workers, 10);
}
