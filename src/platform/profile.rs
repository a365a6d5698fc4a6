// file: src/platform/profile.rs
// version: 1.0.0
// guid: a37b2362-907f-479b-92e2-e38e13d0cba5

//! Fixed table of compiler parameters per host platform

use super::PlatformKey;

/// Compiler flags and overrides for a single host platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub key: PlatformKey,
    pub compiler_override: Option<String>,
    pub define_flag: String,
    pub include_flags: Vec<String>,
    pub library_flags: String,
    pub output_name_override: Option<String>,
}

impl PlatformProfile {
    /// Resolve the profile for a system name. Never fails: unknown names get
    /// the empty profile.
    pub fn resolve(system_name: &str) -> Self {
        Self::for_key(PlatformKey::from_system_name(system_name))
    }

    /// Build the profile for a key
    pub fn for_key(key: PlatformKey) -> Self {
        match key {
            PlatformKey::Linux => Self {
                key,
                compiler_override: None,
                define_flag: "-D LINUX".to_string(),
                include_flags: strings(&["-I ./include/", "-I ./../../common/thirdparty/glm/"]),
                library_flags: String::new(),
                output_name_override: None,
            },
            PlatformKey::Darwin => Self {
                key,
                compiler_override: None,
                define_flag: "-D MAC".to_string(),
                include_flags: strings(&[
                    "-I ./include/",
                    "-I/Library/Frameworks/SDL2.framework/Headers",
                    "-I./../../common/thirdparty/old/glm",
                ]),
                library_flags: String::new(),
                output_name_override: None,
            },
            // MinGW: no debug symbols, static runtime, GUI subsystem
            PlatformKey::Windows => Self {
                key,
                compiler_override: Some("g++ -std=c++17".to_string()),
                define_flag: "-D MINGW -static-libgcc -static-libstdc++".to_string(),
                include_flags: strings(&["-I./include/", "-I./../../common/thirdparty/old/glm/"]),
                library_flags: "-lmingw32 -mwindows".to_string(),
                output_name_override: Some("prog.exe".to_string()),
            },
            PlatformKey::Other => Self::empty(),
        }
    }

    /// Profile with no defines, includes, libraries or overrides
    pub fn empty() -> Self {
        Self {
            key: PlatformKey::Other,
            compiler_override: None,
            define_flag: String::new(),
            include_flags: Vec::new(),
            library_flags: String::new(),
            output_name_override: None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
