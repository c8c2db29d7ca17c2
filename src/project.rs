//! JSON-backed registry mapping project names to their notes directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A directory that notes can be filed under by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub url: String,
    pub id: u32,
}

/// Registered projects, persisted as a pretty-printed JSON array.
pub struct Registry {
    config_path: PathBuf,
    projects: Vec<Project>,
}

impl Registry {
    /// Load the registry, seeding an empty one when the file is missing.
    pub fn load(config_path: PathBuf) -> io::Result<Self> {
        if !config_path.exists() {
            if let Some(dir) = config_path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(&config_path, "[]")?;
            return Ok(Self { config_path, projects: Vec::new() });
        }
        let data = fs::read_to_string(&config_path)?;
        let projects = serde_json::from_str(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { config_path, projects })
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Register a project and persist the registry. Names are unique;
    /// ids continue from the last entry.
    pub fn add(&mut self, name: &str, path: &Path, url: &str) -> io::Result<()> {
        if self.get(name).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "project with same name already exists",
            ));
        }
        let id = self.projects.last().map_or(0, |p| p.id + 1);
        self.projects.push(Project {
            name: name.to_string(),
            path: path.to_path_buf(),
            url: url.to_string(),
            id,
        });
        self.save()
    }

    /// Rewrite the entry with the given id and persist the registry.
    pub fn update(&mut self, id: u32, name: &str, path: &Path, url: &str) -> io::Result<()> {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.name = name.to_string();
                project.path = path.to_path_buf();
                project.url = url.to_string();
            }
            None => {
                return Err(io::Error::new(io::ErrorKind::NotFound, "project not found"));
            }
        }
        self.save()
    }

    fn save(&self) -> io::Result<()> {
        let data = serde_json::to_string_pretty(&self.projects)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.config_path, data)
    }
}
