use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let contents = fs::read_to_string(path)?;
    let data = serde_json::from_str(&contents)?;
    Ok(data)
}

pub fn save_json<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let serialized = serde_json::to_string_pretty(data)?;
    fs::write(path, serialized)?;
    Ok(())
}
