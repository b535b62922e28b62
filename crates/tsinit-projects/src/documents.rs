//! Fixed configuration documents and starter files
//!
//! JSON documents are written pretty-printed with two-space indentation and
//! keys in the order they are declared here.

use crate::error::Result;
use crate::workspace::Workspace;
use camino::Utf8Path;
use serde_json::{json, Value};
use tracing::debug;

/// Port the Express starter listens on
pub const EXPRESS_PORT: u16 = 54321;

/// Response body of the Express starter's only route
pub const EXPRESS_GREETING: &str = "Hello World";

/// Express starter source written to `src/app.ts`
pub const EXPRESS_APP: &str = include_str!("../templates/app.ts");

pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const ESLINT_CONFIG_FILE: &str = ".eslintrc.json";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.json";
pub const INDEX_FILE: &str = "src/index.ts";
pub const APP_FILE: &str = "src/app.ts";
pub const SOURCE_DIR: &str = "src";
pub const OUTPUT_DIR: &str = "dist";

/// Build configuration for tsconfig.json
///
/// NOTE: the compiler options sit one level too deep (`compilerOptions`
/// inside `compilerOptions`) and `include`/`exclude` live inside the outer
/// `compilerOptions` instead of at the top level. tsc ignores all of it.
/// Kept as-is so generated projects match the files earlier releases wrote.
pub fn tsconfig_document() -> Value {
    json!({
        "compilerOptions": {
            "compilerOptions": {
                "esModuleInterop": true,
                "skipLibCheck": true,
                "target": "es2022",
                "allowJs": true,
                "resolveJsonModule": true,
                "moduleDetection": "force",
                "isolatedModules": true,
                "strict": true,
                "noUncheckedIndexedAccess": true,
                "moduleResolution": "NodeNext",
                "module": "NodeNext",
                "outDir": "dist",
                "rootDir": "src",
                "sourceMap": true,
                "lib": ["es2022", "dom", "dom.iterable"]
            },
            "include": ["src/**/*"],
            "exclude": ["node_modules"]
        }
    })
}

/// ESLint configuration for .eslintrc.json
pub fn eslint_config() -> Value {
    json!({
        "env": {
            "browser": true,
            "es2021": true,
            "node": true
        },
        "extends": [
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended"
        ],
        "parser": "@typescript-eslint/parser",
        "parserOptions": {
            "ecmaVersion": 12,
            "sourceType": "module"
        },
        "plugins": ["@typescript-eslint"],
        "rules": {
            "indent": ["error", 2],
            "linebreak-style": ["error", "unix"],
            "quotes": ["error", "single"],
            "semi": ["error", "always"],
            "@typescript-eslint/explicit-module-boundary-types": "off",
            "@typescript-eslint/no-explicit-any": "off"
        }
    })
}

/// Prettier configuration for .prettierrc.json
pub fn prettier_config() -> Value {
    json!({
        "semi": true,
        "trailingComma": "all",
        "singleQuote": true,
        "printWidth": 80,
        "tabWidth": 2
    })
}

/// Serialize `value` as pretty JSON and overwrite `path`
pub fn write_json(path: &Utf8Path, value: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    debug!("Wrote {}", path);
    Ok(())
}

/// Write tsconfig.json, the source and output directories, and an empty entry point
pub fn emit_static_files(workspace: &Workspace) -> Result<()> {
    write_json(&workspace.path(TSCONFIG_FILE), &tsconfig_document())?;
    std::fs::create_dir(workspace.path(SOURCE_DIR))?;
    std::fs::create_dir(workspace.path(OUTPUT_DIR))?;
    std::fs::write(workspace.path(INDEX_FILE), "")?;
    Ok(())
}
