//! Simple example demonstrating action derivation and catalog lookup

use acta::prelude::*;

const CONFIG: &str = r#"
resources:
  - name: posts
    queries:
      - verb: search
        on: collection
    mutations:
      - verb: archive
  - name: comments
    only: [show, index]
  - name: users
    except: [destroy]
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🚀 Acta Simple Router Example\n");

    // Load the declarative config and derive every action
    let config = RouterConfig::from_yaml_str(CONFIG)?;
    let mut registry = config.build_registry();

    // Resources can also be declared in code
    let mut tags = ResourceActions::with_filter("tags", ActionFilter::only(["index", "create"]));
    tags.mutation("rename", Cardinality::Member);
    registry.register(tags);

    println!("📋 Catalog ({} actions):\n", registry.len());
    for action in registry.actions() {
        println!("  {}", action);
    }

    println!("\n🔍 Read-only actions:\n");
    for action in registry.queries() {
        println!("  {} -> {}", action.name(), action.target());
    }

    println!("\n🔍 Resolving by name:\n");
    for name in ["search_posts", "archive_post", "rename_tag"] {
        let action = registry.resolve(name)?;
        println!("  {} dispatches to {}", name, action.target());
    }

    println!("\n📦 Manifest:\n");
    println!("{}", serde_json::to_string_pretty(&registry.manifest())?);

    println!("\n✨ Example completed successfully!");

    Ok(())
}
