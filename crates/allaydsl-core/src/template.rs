//! New-project scaffold templates
//!
//! Renders the files a fresh allay plugin project starts from. Rendering is
//! pure string generation; writing files is left to the caller (the CLI, or
//! whatever wizard embeds this crate).
//!
//! Note the generated `allay` block always carries both `api` and a full
//! `plugin { ... }` descriptor, even though validation only warns when they
//! are absent.

use serde::{Deserialize, Serialize};

/// Settings for a new plugin project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    /// Plugin display name, also used as the Gradle root project name
    pub plugin_name: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
    /// Author recorded in the descriptor
    pub author: String,
    /// Allay API version to build against
    pub api_version: String,
    /// Simple name of the main class
    pub main_class: String,
    /// Maven group id, also the Java package
    pub group_id: String,
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self {
            plugin_name: "MyAllayPlugin".to_string(),
            version: "1.0.0".to_string(),
            description: "My Allay Plugin".to_string(),
            author: std::env::var("USER").unwrap_or_default(),
            api_version: "0.15.0".to_string(),
            main_class: "MyPlugin".to_string(),
            group_id: "com.example".to_string(),
        }
    }
}

impl ProjectTemplate {
    /// Render `build.gradle.kts`
    pub fn build_gradle_kts(&self) -> String {
        format!(
            r#"plugins {{
    java
    id("org.allaymc.gradle.plugin") version "0.1.0"
}}

group = "{group}"
version = "{version}"

repositories {{
    mavenCentral()
}}

java {{
    sourceCompatibility = JavaVersion.VERSION_21
    targetCompatibility = JavaVersion.VERSION_21
}}

allay {{
    api = "{api}"
    apiOnly = true

    plugin {{
        name = "{name}"
        entrance = ".{main_class}"
        version = "{version}"
        description = "{description}"
        authors += "{author}"
        api = ">= {api}"
    }}
}}

dependencies {{
}}
"#,
            group = self.group_id,
            version = self.version,
            api = self.api_version,
            name = self.plugin_name,
            main_class = self.main_class,
            description = self.description,
            author = self.author,
        )
    }

    /// Render `settings.gradle.kts`
    pub fn settings_gradle_kts(&self) -> String {
        format!(
            r#"rootProject.name = "{name}"

pluginManagement {{
    repositories {{
        mavenCentral()
        gradlePluginPortal()
    }}
}}
"#,
            name = self.plugin_name
        )
    }

    /// Render `gradle.properties`
    pub fn gradle_properties(&self) -> String {
        "org.gradle.jvmargs=-Xmx2048m\n".to_string()
    }

    /// Render the main plugin class source
    pub fn main_class_source(&self) -> String {
        format!(
            r#"package {group};

import org.allaymc.api.plugin.Plugin;

public class {main_class} extends Plugin {{
    @Override
    public void onEnable() {{
        pluginLogger.info("{name} enabled!");
    }}

    @Override
    public void onDisable() {{
        pluginLogger.info("{name} disabled!");
    }}
}}
"#,
            group = self.group_id,
            main_class = self.main_class,
            name = self.plugin_name,
        )
    }

    /// Relative path of the main class source file
    pub fn main_class_path(&self) -> String {
        format!(
            "src/main/java/{}/{}.java",
            self.group_id.replace('.', "/"),
            self.main_class
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::scanner::{find_named_calls, scan_block_properties};

    fn template() -> ProjectTemplate {
        ProjectTemplate {
            plugin_name: "TestPlugin".to_string(),
            version: "2.0.0".to_string(),
            description: "A test plugin".to_string(),
            author: "tester".to_string(),
            api_version: "0.15.0".to_string(),
            main_class: "TestMain".to_string(),
            group_id: "org.example.test".to_string(),
        }
    }

    #[test]
    fn test_build_gradle_contains_settings() {
        let rendered = template().build_gradle_kts();
        assert!(rendered.contains("api = \"0.15.0\""));
        assert!(rendered.contains("name = \"TestPlugin\""));
        assert!(rendered.contains("entrance = \".TestMain\""));
        assert!(rendered.contains("group = \"org.example.test\""));
        assert!(rendered.contains("authors += \"tester\""));
    }

    #[test]
    fn test_build_gradle_passes_validation_scan() {
        // The scaffold always emits both recommended top-level properties
        let file = parse(&template().build_gradle_kts());
        let allay = find_named_calls(&file, "allay").next().unwrap();
        let result = scan_block_properties(allay.block.as_ref().unwrap(), &["api"], &["plugin"]);
        assert!(result.is_present("api"));
        assert!(result.is_present("plugin"));

        let plugin = result.nested_call("plugin").unwrap();
        let inner = scan_block_properties(
            plugin.block.as_ref().unwrap(),
            &["entrance", "name", "version"],
            &[],
        );
        assert!(inner.missing(&["entrance", "name", "version"]).is_empty());
    }

    #[test]
    fn test_settings_gradle_names_root_project() {
        let rendered = template().settings_gradle_kts();
        assert!(rendered.contains("rootProject.name = \"TestPlugin\""));
    }

    #[test]
    fn test_main_class_path() {
        assert_eq!(
            template().main_class_path(),
            "src/main/java/org/example/test/TestMain.java"
        );
    }

    #[test]
    fn test_main_class_source() {
        let rendered = template().main_class_source();
        assert!(rendered.contains("package org.example.test;"));
        assert!(rendered.contains("public class TestMain extends Plugin"));
    }

    #[test]
    fn test_defaults_match_wizard() {
        let template = ProjectTemplate::default();
        assert_eq!(template.plugin_name, "MyAllayPlugin");
        assert_eq!(template.api_version, "0.15.0");
        assert_eq!(template.group_id, "com.example");
    }
}
