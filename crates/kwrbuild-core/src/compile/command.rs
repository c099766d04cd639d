//! Compile command construction.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BuildConfig;
use crate::manifest::Manifest;

/// A compiler invocation: program plus argument list.
///
/// Arguments are passed to the process directly, never through a shell,
/// so manifest entries containing spaces or metacharacters stay single
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    /// Resolved program that gets spawned
    program: PathBuf,
    /// Program as configured, used for display
    name: String,
    args: Vec<OsString>,
    output: PathBuf,
}

impl CompileCommand {
    /// Build the argument list:
    /// `-std=<standard> <sources...> <warnings...> <library flags...> -o <output>`.
    pub fn new(
        program: impl Into<PathBuf>,
        config: &BuildConfig,
        manifest: &Manifest,
        library_flags: &[String],
        output: impl Into<PathBuf>,
    ) -> Self {
        let output = output.into();
        let mut args: Vec<OsString> = Vec::with_capacity(
            manifest.len() + config.warning_flags.len() + library_flags.len() + 3,
        );

        args.push(config.standard_flag().into());
        args.extend(manifest.sources().iter().map(OsString::from));
        args.extend(config.warning_flags.iter().map(OsString::from));
        args.extend(library_flags.iter().map(OsString::from));
        args.push("-o".into());
        args.push(output.clone().into_os_string());

        Self {
            program: program.into(),
            name: config.compiler.clone(),
            args,
            output,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Path passed to `-o`.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// A ready-to-spawn [`Command`].
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", display_arg(arg))?;
        }
        Ok(())
    }
}

/// Quote an argument for display if it would otherwise read ambiguously.
fn display_arg(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || "'\"`$\\;&|<>()*?".contains(c)) {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdl_flags() -> Vec<String> {
        vec![
            "-I/usr/include/SDL".to_string(),
            "-D_GNU_SOURCE=1".to_string(),
            "-lSDL".to_string(),
        ]
    }

    #[test]
    fn test_argument_order() {
        let config = BuildConfig::default();
        let manifest = Manifest::parse("kwrgame.cpp\n kwrsdl.cpp \nmaze.cpp\n");

        let command = CompileCommand::new("g++", &config, &manifest, &sdl_flags(), config.output_path(None).unwrap());

        assert_eq!(
            command.args(),
            [
                "-std=c++0x",
                "kwrgame.cpp",
                "kwrsdl.cpp",
                "maze.cpp",
                "-pedantic",
                "-I/usr/include/SDL",
                "-D_GNU_SOURCE=1",
                "-lSDL",
                "-o",
                "bin/test",
            ]
            .map(OsString::from)
        );
        assert_eq!(command.output(), Path::new("bin/test"));
    }

    #[test]
    fn test_empty_manifest_keeps_fixed_flags() {
        let config = BuildConfig::default();
        let manifest = Manifest::parse("");

        let command = CompileCommand::new("g++", &config, &manifest, &[], config.output_path(Some("game")).unwrap());

        assert_eq!(command.to_string(), "g++ -std=c++0x -pedantic -o bin/game");
    }

    #[test]
    fn test_metacharacters_stay_single_arguments() {
        let config = BuildConfig::default();
        let manifest = Manifest::parse("my file.cpp\nx.cpp; rm -rf ~\n");

        let command = CompileCommand::new("g++", &config, &manifest, &[], config.output_path(None).unwrap());

        assert_eq!(command.args()[1], "my file.cpp");
        assert_eq!(command.args()[2], "x.cpp; rm -rf ~");
        assert_eq!(
            command.to_string(),
            "g++ -std=c++0x 'my file.cpp' 'x.cpp; rm -rf ~' -pedantic -o bin/test"
        );
    }

    #[test]
    fn test_display_uses_configured_name() {
        let config = BuildConfig::default();
        let manifest = Manifest::parse("hello.cpp");

        let command = CompileCommand::new("/usr/bin/g++", &config, &manifest, &[], config.output_path(None).unwrap());

        assert_eq!(command.program(), Path::new("/usr/bin/g++"));
        assert_eq!(command.to_string(), "g++ -std=c++0x hello.cpp -pedantic -o bin/test");
    }

    #[test]
    fn test_to_command() {
        let config = BuildConfig::default();
        let manifest = Manifest::parse("hello.cpp");

        let command = CompileCommand::new("g++", &config, &manifest, &sdl_flags(), config.output_path(None).unwrap());
        let cmd = command.to_command();

        assert_eq!(cmd.get_program(), "g++");
        assert_eq!(cmd.get_args().count(), command.args().len());
    }
}
