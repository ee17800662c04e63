use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{validate_file_extension, validate_non_empty_string};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFINITION_EXTENSION: &str = "tars";
pub const DEFAULT_COMPILER: &str = "tars2go";
pub const DEFAULT_ENTRY_POINT: &str = "main.go";
pub const README_FILE: &str = "readme.md";
/// Subdirectory that receives the generated bindings.
pub const PROTOCOL_DIR: &str = "protocol";

/// One directory of the scaffolded tree and the text of its `readme.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirSpec {
    pub path: &'static str,
    pub description: &'static str,
}

pub const PROJECT_LAYOUT: [DirSpec; 13] = [
    DirSpec {
        path: "client",
        description: "这里是rpc请求的客户端代码封装",
    },
    DirSpec {
        path: "config/mysql",
        description: "这里是mysql相关配置",
    },
    DirSpec {
        path: "config/es",
        description: "这里是es相关配置",
    },
    DirSpec {
        path: "config/redis",
        description: "这里是redis相关配置",
    },
    DirSpec {
        path: "constant",
        description: "这里是常量信息",
    },
    DirSpec {
        path: "data",
        description: "这里是项目使用到的所有数据类型和结构的封装",
    },
    DirSpec {
        path: "impl",
        description: "这里是tars服务的接口实现",
    },
    DirSpec {
        path: "model/es",
        description: "这里是es的数据库模板封装",
    },
    DirSpec {
        path: "model/mysql",
        description: "这里是mysql的数据库模板封装",
    },
    DirSpec {
        path: "model/redis",
        description: "这里是redis的模板封装",
    },
    DirSpec {
        path: "protocol",
        description: "这里是tars协议生成的相关协议代码",
    },
    DirSpec {
        path: "service",
        description: "这里是核心业务逻辑，请将业务逻辑相关的代码实现写在这里，impl作为controller层进行请求分发和出错处理",
    },
    DirSpec {
        path: "tool",
        description: "这里是项目用到的工具类代码封装，请不要在这里写业务逻辑",
    },
];

/// `readme.md` body for a description: the text plus a trailing newline.
pub fn readme_content(description: &str) -> String {
    format!("{}\n", description)
}

/// Last `/` segment of a Go module path, e.g. `github.com/org/tgs` -> `tgs`.
pub fn base_dir_from_module(module: &str) -> Result<String> {
    validate_non_empty_string("-m", module)?;
    if module.trim() != module {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: "-m".to_string(),
            value: module.to_string(),
            reason: "Module must not start or end with whitespace".to_string(),
        });
    }

    let base_dir = module.rsplit('/').next().unwrap_or_default();
    if base_dir.is_empty() || base_dir == "." || base_dir == ".." {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: "-m".to_string(),
            value: module.to_string(),
            reason: "The last path segment of the module must name a directory".to_string(),
        });
    }
    Ok(base_dir.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerSettings {
    pub program: String,
    /// Inserted after `-outdir <dir>` and before the definition file.
    pub extra_args: Vec<String>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_COMPILER.to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Everything one run needs. Built once, then passed by reference to each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub module: String,
    pub definition_file: PathBuf,
    pub base_dir: String,
    /// Directory the base directory is created in.
    pub output_dir: PathBuf,
    pub compiler: CompilerSettings,
    pub entry_point: String,
    pub copy_definition: bool,
}

impl RunConfig {
    /// Validates the module and definition file and fills in defaults for the rest.
    pub fn new(module: &str, definition_file: &str) -> Result<Self> {
        let base_dir = base_dir_from_module(module)?;
        validate_file_extension("-f", definition_file, DEFINITION_EXTENSION)?;

        Ok(Self {
            module: module.to_string(),
            definition_file: PathBuf::from(definition_file),
            base_dir,
            output_dir: PathBuf::from("."),
            compiler: CompilerSettings::default(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            copy_definition: true,
        })
    }

    /// Path relative to the output directory, e.g. `tgs/protocol`.
    pub fn relative(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_dir.clone()
        } else {
            format!("{}/{}", self.base_dir, path)
        }
    }

    /// On-disk path of the base directory.
    pub fn project_root(&self) -> PathBuf {
        if self.output_dir == Path::new(".") {
            PathBuf::from(&self.base_dir)
        } else {
            self.output_dir.join(&self.base_dir)
        }
    }

    pub fn protocol_dir(&self) -> PathBuf {
        self.project_root().join(PROTOCOL_DIR)
    }

    pub fn entry_point_path(&self) -> String {
        self.relative(&self.entry_point)
    }
}

/// An external program invocation: program name plus its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Human readable exit status, e.g. `exit status: 1`.
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    pub stdout: String,
    /// Where the definition file was copied to, if the copy happened.
    pub copied_definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPointOutcome {
    Written { path: String },
    /// The file could not be written; the template was printed instead.
    Fallback { path: String, reason: String },
}

impl EntryPointOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub base_dir: String,
    pub readme_files: Vec<String>,
    pub compile: CompileOutcome,
    pub entry_point: EntryPointOutcome,
}

/// What a run would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub directories: Vec<String>,
    pub command: CommandSpec,
    pub entry_point: String,
}
