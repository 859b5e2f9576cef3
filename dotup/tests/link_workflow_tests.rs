use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use dotup::catalog::default_link_specs;
use dotup::{install_links, FailureMode, LinkStatus};

/// Test fixture: a fake dotfiles checkout and a fake home directory.
struct LinkTestFixture {
    _temp_dir: TempDir,
    repo_root: PathBuf,
    home: PathBuf,
}

impl LinkTestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo_root = temp_dir.path().join("dotfiles");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&repo_root).unwrap();
        fs::create_dir_all(&home).unwrap();

        for name in [".zshrc", ".gitignore_global", ".tmux.conf", ".emacs", "Cask"] {
            fs::write(repo_root.join(name), format!("# {}\n", name)).unwrap();
        }

        Self {
            _temp_dir: temp_dir,
            repo_root,
            home,
        }
    }

    /// `Cask` links into `~/.emacs.d/`, which a fresh home lacks.
    fn with_emacs_d(self) -> Self {
        fs::create_dir_all(self.home.join(".emacs.d")).unwrap();
        self
    }
}

#[test]
fn full_catalog_links_into_a_fresh_home() {
    let fixture = LinkTestFixture::new().with_emacs_d();
    let specs = default_link_specs(&fixture.repo_root, &fixture.home);

    let results = install_links(&specs, FailureMode::Continue).unwrap();

    assert_eq!(results.len(), 5);
    for result in &results {
        assert!(
            matches!(result.status, LinkStatus::Created { .. }),
            "{} was not created",
            result.title
        );
    }
    assert_eq!(
        fs::read_link(fixture.home.join(".zshrc")).unwrap(),
        fixture.repo_root.join(".zshrc")
    );
    assert_eq!(
        fs::read_link(fixture.home.join(".emacs.d/Cask")).unwrap(),
        fixture.repo_root.join("Cask")
    );
}

#[test]
fn rerun_skips_every_entry_and_leaves_links_intact() {
    let fixture = LinkTestFixture::new().with_emacs_d();
    let specs = default_link_specs(&fixture.repo_root, &fixture.home);

    install_links(&specs, FailureMode::Continue).unwrap();
    let second = install_links(&specs, FailureMode::Continue).unwrap();

    for result in &second {
        assert_eq!(result.status, LinkStatus::Skipped, "{}", result.title);
    }
    assert_eq!(
        fs::read_link(fixture.home.join(".tmux.conf")).unwrap(),
        fixture.repo_root.join(".tmux.conf")
    );
}

#[test]
fn missing_emacs_d_fails_only_the_cask_entry() {
    // Fresh home without ~/.emacs.d: the Cask symlink has no parent
    // directory, the other four entries still land.
    let fixture = LinkTestFixture::new();
    let specs = default_link_specs(&fixture.repo_root, &fixture.home);

    let results = install_links(&specs, FailureMode::Continue).unwrap();

    let failed: Vec<_> = results
        .iter()
        .filter(|r| matches!(r.status, LinkStatus::Failed { .. }))
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(failed, vec!["Cask"]);
    assert!(fixture.home.join(".zshrc").is_symlink());
    assert!(fixture.home.join(".emacs").is_symlink());
}

#[test]
fn fail_fast_aborts_before_later_entries() {
    let fixture = LinkTestFixture::new();
    // Reorder so the entry with the missing parent comes first.
    let mut specs = default_link_specs(&fixture.repo_root, &fixture.home);
    specs.rotate_right(1);
    assert_eq!(specs[0].title, "Cask");

    let err = install_links(&specs, FailureMode::Abort).unwrap_err();

    assert!(err.to_string().contains("Cask"));
    assert!(!fixture.home.join(".zshrc").is_symlink());
}

#[test]
fn report_lines_render_in_catalog_order() {
    let fixture = LinkTestFixture::new().with_emacs_d();
    let specs = default_link_specs(&fixture.repo_root, &fixture.home);

    let results = install_links(&specs, FailureMode::Continue).unwrap();

    let lines: Vec<String> = results.iter().map(|r| r.render()).collect();
    assert!(lines[0].starts_with("[.zshrc]"));
    assert!(lines[4].starts_with("[Cask]"));
    assert!(lines[0].contains(&format!(
        "Create symlink to {}",
        fixture.home.join(".zshrc").display()
    )));
}

#[test]
fn pre_existing_dotfile_survives_a_run() {
    let fixture = LinkTestFixture::new().with_emacs_d();
    fs::write(fixture.home.join(".zshrc"), "hand-written config").unwrap();
    let specs = default_link_specs(&fixture.repo_root, &fixture.home);

    let results = install_links(&specs, FailureMode::Continue).unwrap();

    assert_eq!(results[0].status, LinkStatus::Skipped);
    assert_eq!(
        fs::read_to_string(fixture.home.join(".zshrc")).unwrap(),
        "hand-written config"
    );
}
