use crate::core::{RunConfig, Storage};
use crate::domain::model::EntryPointOutcome;

/// Go entry point for the generated service.
pub const ENTRY_POINT_TEMPLATE: &str = r#"package main

import (
	"fmt"
	"os"

	"github.com/TarsCloud/TarsGo/tars"
)

func main() {
	// Get server config
	cfg := tars.GetServerConfig()

	// New servant imp
	imp := new(impl.APIImpl)
	err := imp.Init()
	if err != nil {
		fmt.Printf("apiImp init fail, err:(%s)\n", err)
		os.Exit(-1)
	}
	// New servant
	app := new(tarsfile.Api)
	// Register Servant
	app.AddServantWithContext(imp, cfg.App+"."+cfg.Server+".obj")

	// Run application
	tars.Run()
}"#;

pub struct EntryPointWriter<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> EntryPointWriter<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Never fails the run: a write error turns into `EntryPointOutcome::Fallback`.
    pub async fn write(&self, config: &RunConfig) -> EntryPointOutcome {
        let path = config.entry_point_path();

        match self
            .storage
            .write_executable(&path, ENTRY_POINT_TEMPLATE.as_bytes())
            .await
        {
            Ok(()) => {
                tracing::debug!("Wrote {}", path);
                EntryPointOutcome::Written { path }
            }
            Err(e) => {
                tracing::warn!("Failed to write {}: {}", path, e);
                EntryPointOutcome::Fallback {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }
}
