use anyhow::Result;

use super::super::args::CommonArgs;
use crate::project::Project;

/// Load the project named by the common arguments.
pub fn open_project(common: &CommonArgs) -> Result<Project> {
    Project::load(&common.path, &common.overrides())
}
