// file: src/platform/mod.rs
// version: 1.0.0
// guid: f20995c7-87ae-4afb-8040-e3c4455c618d

//! Host platform detection and per-platform compiler profiles

pub mod profile;

pub use profile::PlatformProfile;

/// Host platforms with a dedicated compiler profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKey {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl PlatformKey {
    /// Map a system name ("Linux", "Darwin", "Windows") to its key.
    ///
    /// Matching is exact. Anything unrecognised becomes `Other`.
    pub fn from_system_name(name: &str) -> Self {
        match name {
            "Linux" => PlatformKey::Linux,
            "Darwin" => PlatformKey::Darwin,
            "Windows" => PlatformKey::Windows,
            _ => PlatformKey::Other,
        }
    }

    /// Get the key as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::Linux => "Linux",
            PlatformKey::Darwin => "Darwin",
            PlatformKey::Windows => "Windows",
            PlatformKey::Other => "Other",
        }
    }
}

impl std::fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name of the host operating system, in kernel-name style.
pub fn host_system_name() -> String {
    system_name_for(std::env::consts::OS)
}

fn system_name_for(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        "aix" => "AIX".to_string(),
        "haiku" => "Haiku".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_system_name_known() {
        assert_eq!(PlatformKey::from_system_name("Linux"), PlatformKey::Linux);
        assert_eq!(PlatformKey::from_system_name("Darwin"), PlatformKey::Darwin);
        assert_eq!(PlatformKey::from_system_name("Windows"), PlatformKey::Windows);
    }

    #[test]
    fn test_from_system_name_is_case_sensitive() {
        assert_eq!(PlatformKey::from_system_name("linux"), PlatformKey::Other);
        assert_eq!(PlatformKey::from_system_name("WINDOWS"), PlatformKey::Other);
    }

    #[test]
    fn test_from_system_name_unknown() {
        assert_eq!(PlatformKey::from_system_name("BSD"), PlatformKey::Other);
        assert_eq!(PlatformKey::from_system_name(""), PlatformKey::Other);
    }

    #[test]
    fn test_system_name_mapping() {
        assert_eq!(system_name_for("linux"), "Linux");
        assert_eq!(system_name_for("macos"), "Darwin");
        assert_eq!(system_name_for("windows"), "Windows");
        assert_eq!(system_name_for("freebsd"), "FreeBSD");
        assert_eq!(system_name_for("dragonfly"), "DragonFly");
        assert_eq!(system_name_for("illumos"), "SunOS");
        assert_eq!(system_name_for("solaris"), "SunOS");
        assert_eq!(system_name_for("aix"), "AIX");
        assert_eq!(system_name_for("redox"), "Redox");
        assert_eq!(system_name_for(""), "");
    }

    #[test]
    fn test_host_system_name_matches_build_target() {
        let name = host_system_name();

        if cfg!(target_os = "linux") {
            assert_eq!(name, "Linux");
        } else if cfg!(target_os = "macos") {
            assert_eq!(name, "Darwin");
        } else if cfg!(target_os = "windows") {
            assert_eq!(name, "Windows");
        } else {
            assert!(!name.is_empty());
        }
    }
}
