//! Init command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::config::UserConfig;
use crate::error::SetupError;
use crate::profile::ProfileStore;
use crate::scaffold::request::{dedup_profiles, DEFAULT_MODULE_PATH, DEFAULT_PROFILE};
use crate::scaffold::{
    apply_structure, EmbeddedTemplates, LicenseChoice, Report, ScaffoldRequest, TemplateSource,
};
use crate::utils::paths::{self, ConfigPaths};
use crate::utils::terminal::{print_info, print_step, print_success, print_warning};
use crate::utils::tools::{GoVersion, VersionSource};

/// Initialize a project with the recommended layout
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Initialize all files and directories in the recommended layout
    #[arg(short, long)]
    pub full: bool,

    /// Initialize the operations files (bare-minimum setup runs as well)
    #[arg(short, long)]
    pub ops: bool,

    /// License for the LICENSE file: mit or apache [default: mit]
    #[arg(short = 'i', long, env = "GO_SETUP_LICENSE")]
    pub license: Option<String>,

    /// Location for the project structure setup
    #[arg(short, long, default_value = ".")]
    pub location: PathBuf,

    /// Author name and email, e.g. "Jane Doe jane.doe@gmail.com"
    #[arg(short, long, env = "GO_SETUP_AUTHOR")]
    pub author: Option<String>,

    /// Module path for go.mod [default: .]
    #[arg(short, long)]
    pub module_path: Option<String>,

    /// Profile(s) to copy into the project; repeat or separate with commas
    #[arg(short, long, value_delimiter = ',')]
    pub profile: Vec<String>,

    /// Only initialize the ~/.go-setup/profiles path
    #[arg(short, long)]
    pub config: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self) -> Result<()> {
        if let Err(e) = check_location(&self.location) {
            fail(e);
        }

        let config_paths = match ConfigPaths::discover() {
            Ok(p) => Some(p),
            Err(e) => {
                e.display_with_hints();
                None
            }
        };
        let user_config = load_user_config(config_paths.as_ref()).unwrap_or_else(|e| fail(e));

        let request = self.into_request(&user_config);
        match run(&request, config_paths.as_ref(), &EmbeddedTemplates) {
            Ok(report) => {
                if report.has_warnings() {
                    print_warning(&format!("finished with issues: {}", report));
                } else {
                    print_success(&report.to_string());
                }
                Ok(())
            }
            Err(e) => fail(e),
        }
    }

    /// Merge flags over config over built-in defaults
    pub fn into_request(self, user_config: &UserConfig) -> ScaffoldRequest {
        let defaults = &user_config.defaults;
        let mut request = ScaffoldRequest::new(self.location);

        request.author = self
            .author
            .or_else(|| defaults.author.clone())
            .unwrap_or_default();
        request.module_path = self
            .module_path
            .or_else(|| defaults.module_path.clone())
            .unwrap_or_else(|| DEFAULT_MODULE_PATH.to_string());

        let license = self
            .license
            .or_else(|| defaults.license.clone())
            .unwrap_or_else(|| "mit".to_string());
        request.license = LicenseChoice::parse(&license);

        let profiles = if self.profile.is_empty() {
            defaults
                .profiles
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_PROFILE.to_string()])
        } else {
            self.profile
        };
        request.profiles = dedup_profiles(profiles);

        request.full = self.full;
        request.ops = self.ops;
        request.config_only = self.config;

        if !request.config_only {
            let version = GoVersion::resolve(user_config.toolchain.go_version.as_deref());
            if version.source == VersionSource::Fallback {
                print_warning(&format!(
                    "Go toolchain not found, using go {} in go.mod",
                    version.major_minor
                ));
            }
            request.go_version = version.major_minor;
        }

        request
    }
}

fn fail(err: SetupError) -> ! {
    err.display_with_hints();
    std::process::exit(1);
}

/// Drive one init run
///
/// Returns `Err` only for a missing target location; everything else ends
/// up as a warning on the returned [`Report`].
pub fn run<T: TemplateSource + ?Sized>(
    request: &ScaffoldRequest,
    config_paths: Option<&ConfigPaths>,
    templates: &T,
) -> Result<Report, SetupError> {
    check_location(&request.location)?;

    let mut report = Report::new();
    if let Some(paths) = config_paths {
        match paths.ensure_profiles_dir() {
            Ok(dir) => print_info(&format!(
                "Config and profiles path set up at {}",
                dir.display()
            )),
            Err(e) => report.warn(e),
        }
    }

    if request.config_only {
        return Ok(report);
    }

    if !request.author.is_empty() {
        print_step(&format!("author: {}", request.author));
    }

    if request.wants_profiles() {
        match config_paths {
            Some(paths) => ProfileStore::new(paths.clone()).apply(
                &request.profiles,
                &request.location,
                &mut report,
            ),
            None => report.warn(SetupError::config_error_with_hint(
                "profiles requested but the home directory is unknown",
                "Set the HOME environment variable",
            )),
        }
    }

    apply_structure(request, &request.location, templates, &mut report);
    Ok(report)
}

/// Read `config.toml`; only a malformed file is fatal
fn load_user_config(config_paths: Option<&ConfigPaths>) -> Result<UserConfig, SetupError> {
    let Some(paths) = config_paths else {
        return Ok(UserConfig::default());
    };
    match UserConfig::load_or_default(&paths.config_file()) {
        Ok(config) => Ok(config),
        Err(e @ SetupError::Config { .. }) => Err(e),
        Err(e) => {
            e.display_with_hints();
            Ok(UserConfig::default())
        }
    }
}

fn check_location(location: &Path) -> Result<(), SetupError> {
    if !paths::exists(location)? || !location.is_dir() {
        return Err(SetupError::LocationNotFound {
            path: location.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn command(location: &Path) -> InitCommand {
        InitCommand {
            full: false,
            ops: false,
            license: None,
            location: location.to_path_buf(),
            author: None,
            module_path: None,
            profile: Vec::new(),
            config: true,
        }
    }

    #[test]
    fn test_missing_location_aborts_before_any_write() {
        let home = TempDir::new().unwrap();
        let missing = home.path().join("nowhere");
        let config_paths = ConfigPaths::with_home(home.path());
        let request = ScaffoldRequest::new(&missing);

        let err = run(&request, Some(&config_paths), &EmbeddedTemplates).unwrap_err();

        assert!(matches!(err, SetupError::LocationNotFound { .. }));
        assert!(!missing.exists());
        assert!(!config_paths.root().exists());
    }

    #[test]
    fn test_config_only_sets_up_profiles_dir() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let config_paths = ConfigPaths::with_home(home.path());
        let mut request = ScaffoldRequest::new(project.path());
        request.config_only = true;

        let report = run(&request, Some(&config_paths), &EmbeddedTemplates).unwrap();

        assert!(report.created().is_empty());
        assert!(config_paths.profiles_dir().is_dir());
        assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_profile_applied_before_layout() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let config_paths = ConfigPaths::with_home(home.path());
        let profile = config_paths.profile_dir("team");
        fs::create_dir_all(&profile).unwrap();
        fs::write(profile.join("README.md"), "team readme").unwrap();

        let mut request = ScaffoldRequest::new(project.path());
        request.profiles = vec!["team".to_string()];

        let report = run(&request, Some(&config_paths), &EmbeddedTemplates).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("README.md")).unwrap(),
            "team readme"
        );
        assert_eq!(report.existing_count(), 1);
        assert!(project.path().join("main.go").is_file());
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let home = TempDir::new().unwrap();
        let config_paths = ConfigPaths::with_home(home.path());
        // A directory where the file should be cannot be read, even by root
        fs::create_dir_all(config_paths.config_file()).unwrap();

        let config = load_user_config(Some(&config_paths)).unwrap();
        assert!(config.defaults.license.is_none());
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let home = TempDir::new().unwrap();
        let config_paths = ConfigPaths::with_home(home.path());
        fs::create_dir_all(config_paths.root()).unwrap();
        fs::write(config_paths.config_file(), "[defaults\nlicense = ").unwrap();

        assert!(matches!(
            load_user_config(Some(&config_paths)),
            Err(SetupError::Config { .. })
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let user_config = UserConfig::parse(
            "[defaults]\nlicense = \"apache\"\nauthor = \"Config Author\"\nprofiles = [\"base\"]\n",
        )
        .unwrap();

        let mut cmd = command(Path::new("."));
        cmd.license = Some("mit".to_string());
        cmd.profile = vec!["web".to_string(), "web".to_string(), "cli".to_string()];
        let request = cmd.into_request(&user_config);

        assert_eq!(request.license, LicenseChoice::Mit);
        assert_eq!(request.author, "Config Author");
        assert_eq!(request.profiles, vec!["web", "cli"]);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let user_config =
            UserConfig::parse("[defaults]\nlicense = \"apache\"\nprofiles = [\"base\"]\n").unwrap();

        let request = command(Path::new(".")).into_request(&user_config);

        assert_eq!(request.license, LicenseChoice::Apache);
        assert_eq!(request.profiles, vec!["base"]);
        assert_eq!(request.module_path, DEFAULT_MODULE_PATH);
    }
}
