use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tokio::fs;

use rvm_domain::FleetSeed;

/// Loads seed rows from a `.json`, `.yaml` or `.yml` file.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<FleetSeed> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    let seed: FleetSeed = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        other => {
            return Err(anyhow!(
                "unsupported seed file extension '{}' for {}",
                other,
                path.display()
            ))
        }
    };
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvm_domain::TransactionKind;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("rvm-seed-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(name);
        std::fs::write(&path, content).expect("write seed");
        path
    }

    #[tokio::test]
    async fn loads_json_seed() {
        let path = temp_file(
            "seed.json",
            r#"{
  "users": [
    {"id": 7, "name": "Carol", "mobile": 3333333333, "points": 0, "bottles": 0,
     "created_at": "2024-05-01T00:00:00Z"}
  ],
  "machines": [
    {"id": 4, "machine_id": "M010", "name": "Depot", "city": "Trichy",
     "lat": 1.5, "lng": 2.5, "current_bottles": 5, "max_capacity": 5,
     "created_at": "2024-05-01T00:00:00Z"}
  ],
  "transactions": [
    {"id": 1, "user_id": 7, "type": "earn", "points": 10, "bottles": 2,
     "machine_id": "M010", "created_at": "2024-05-01T00:00:00Z"}
  ]
}"#,
        );
        let seed = load_seed_file(&path).await.expect("load seed");
        assert_eq!(seed.users[0].name, "Carol");
        assert_eq!(seed.machines[0].machine_id, "M010");
        assert!(seed.machines[0].last_emptied.is_none());
        assert_eq!(seed.transactions[0].kind, TransactionKind::Earn);
        assert!(seed.transactions[0].brand_id.is_none());
    }

    #[tokio::test]
    async fn loads_yaml_seed_with_missing_sections() {
        let path = temp_file(
            "seed.yaml",
            r#"
users:
  - id: 1
    name: Alice
    mobile: 1111111111
    points: 100
    bottles: 10
    created_at: "2024-05-01T00:00:00Z"
"#,
        );
        let seed = load_seed_file(&path).await.expect("load seed");
        assert_eq!(seed.users.len(), 1);
        assert!(seed.machines.is_empty());
        assert!(seed.transactions.is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_extension() {
        let path = temp_file("seed.csv", "id,name\n");
        assert!(load_seed_file(&path).await.is_err());
    }
}
