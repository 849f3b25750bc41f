use std::fs;
use std::path::Path;

use canopy::block::{collect_files, seal_block, BlockError, BlockLimits, BlockManifest};
use canopy::merkle::Blake2sTreeHasher;

const SIX_FILE_ROOT: &str = "3c87e909e221a8a960d6ed5649dbe4738092d28ac7b384b7db7b0b022522321d";

/// Three files at the top level, three inside a subdirectory. Path-sorted
/// leaf order: alpha, bravo, charlie, nested/delta, nested/echo,
/// nested/foxtrot.
fn write_sample_block(dir: &Path) {
    fs::write(dir.join("alpha.txt"), b"alpha\n").unwrap();
    fs::write(dir.join("bravo.txt"), b"bravo\n").unwrap();
    fs::write(dir.join("charlie.txt"), b"charlie\n").unwrap();
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested/delta.txt"), b"delta\n").unwrap();
    fs::write(dir.join("nested/echo.txt"), b"echo\n").unwrap();
    fs::write(dir.join("nested/foxtrot.txt"), b"foxtrot\n").unwrap();
}

#[test]
fn seal_and_verify_every_file() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let manifest = seal_block::<Blake2sTreeHasher>(dir.path(), &BlockLimits::default()).unwrap();
    assert_eq!(manifest.file_count, 6);
    assert_eq!(manifest.root.to_hex().to_string(), SIX_FILE_ROOT);
    assert_eq!(manifest.short_id(), &SIX_FILE_ROOT[..8]);

    let contents: [&[u8]; 6] = [
        b"alpha\n",
        b"bravo\n",
        b"charlie\n",
        b"delta\n",
        b"echo\n",
        b"foxtrot\n",
    ];
    for (index, bytes) in contents.iter().enumerate() {
        assert!(
            manifest.verify_file::<Blake2sTreeHasher>(index, bytes).unwrap(),
            "index {index}"
        );
        assert_eq!(manifest.files[index].index, index);
        assert_eq!(manifest.files[index].size, bytes.len() as u64);
    }
    assert_eq!(manifest.files[0].filename, "alpha.txt");
    assert_eq!(manifest.files[5].filename, "foxtrot.txt");
}

#[test]
fn manifest_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let manifest = seal_block::<Blake2sTreeHasher>(dir.path(), &BlockLimits::default()).unwrap();
    let json = manifest.to_json().unwrap();
    let restored = BlockManifest::from_json(&json).unwrap();
    assert_eq!(manifest, restored);
    assert!(restored
        .verify_file::<Blake2sTreeHasher>(2, b"charlie\n")
        .unwrap());
}

#[test]
fn tampered_file_fails_verification() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let manifest = seal_block::<Blake2sTreeHasher>(dir.path(), &BlockLimits::default()).unwrap();
    assert!(!manifest
        .verify_file::<Blake2sTreeHasher>(0, b"alpha!\n")
        .unwrap());
    // A correct file under the wrong index fails as well.
    assert!(!manifest
        .verify_file::<Blake2sTreeHasher>(1, b"alpha\n")
        .unwrap());
}

#[test]
fn unknown_file_index_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let manifest = seal_block::<Blake2sTreeHasher>(dir.path(), &BlockLimits::default()).unwrap();
    assert!(matches!(
        manifest.verify_file::<Blake2sTreeHasher>(99, b"alpha\n"),
        Err(BlockError::UnknownFile { index: 99, count: 6 })
    ));
}

#[test]
fn sealing_is_order_independent() {
    let forward = tempfile::tempdir().unwrap();
    write_sample_block(forward.path());

    // Same contents created in reverse order: discovery sorts by path, so the
    // leaf order and the root must not change.
    let reverse = tempfile::tempdir().unwrap();
    fs::create_dir(reverse.path().join("nested")).unwrap();
    fs::write(reverse.path().join("nested/foxtrot.txt"), b"foxtrot\n").unwrap();
    fs::write(reverse.path().join("nested/echo.txt"), b"echo\n").unwrap();
    fs::write(reverse.path().join("nested/delta.txt"), b"delta\n").unwrap();
    fs::write(reverse.path().join("charlie.txt"), b"charlie\n").unwrap();
    fs::write(reverse.path().join("bravo.txt"), b"bravo\n").unwrap();
    fs::write(reverse.path().join("alpha.txt"), b"alpha\n").unwrap();

    let limits = BlockLimits::default();
    let first = seal_block::<Blake2sTreeHasher>(forward.path(), &limits).unwrap();
    let second = seal_block::<Blake2sTreeHasher>(reverse.path(), &limits).unwrap();
    assert_eq!(first.root, second.root);
}

#[test]
fn collect_files_is_recursive_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let files = collect_files(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|path| {
            path.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(
        names,
        [
            "alpha.txt",
            "bravo.txt",
            "charlie.txt",
            "nested/delta.txt",
            "nested/echo.txt",
            "nested/foxtrot.txt",
        ]
    );
}

#[test]
fn too_many_files_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let limits = BlockLimits {
        max_files: 2,
        ..BlockLimits::default()
    };
    assert!(matches!(
        seal_block::<Blake2sTreeHasher>(dir.path(), &limits),
        Err(BlockError::TooManyFiles { count: 6, limit: 2 })
    ));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    let limits = BlockLimits {
        max_file_bytes: 3,
        ..BlockLimits::default()
    };
    assert!(matches!(
        seal_block::<Blake2sTreeHasher>(dir.path(), &limits),
        Err(BlockError::FileTooLarge { limit: 3, .. })
    ));
}

#[test]
fn zero_limits_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_block(dir.path());

    for limits in [
        BlockLimits {
            max_file_bytes: 0,
            ..BlockLimits::default()
        },
        BlockLimits {
            max_files: 0,
            ..BlockLimits::default()
        },
    ] {
        assert!(matches!(
            seal_block::<Blake2sTreeHasher>(dir.path(), &limits),
            Err(BlockError::InvalidLimits { .. })
        ));
    }
}

#[test]
fn empty_folder_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        seal_block::<Blake2sTreeHasher>(dir.path(), &BlockLimits::default()),
        Err(BlockError::EmptyBlock(_))
    ));
}

#[test]
fn non_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"plain\n").unwrap();
    assert!(matches!(
        seal_block::<Blake2sTreeHasher>(&file, &BlockLimits::default()),
        Err(BlockError::NotADirectory(_))
    ));
    assert!(matches!(
        collect_files(&file),
        Err(BlockError::NotADirectory(_))
    ));
}
