//! Wrapper source template

/// Plugin contract every wrapper implements
pub const PLUGIN_CONTRACT_TYPE: &str = "org.gradle.api.Plugin";

/// Project-context type handed to compiled scripts
pub const DEFAULT_CONTEXT_TYPE: &str = "org.gradle.api.Project";

/// Extension of generated wrapper sources
pub const DEFAULT_WRAPPER_EXTENSION: &str = "kt";

/// Strip the indentation common to all non-blank lines
///
/// A blank first or last line is dropped, so a template can start and end on
/// its own line. Blank lines in between become empty.
///
/// # Example
///
/// ```rust
/// use plugscript_codegen::trim_indent;
///
/// let text = trim_indent("
///     class A {
///         val x = 1
///     }
/// ");
/// assert_eq!(text, "class A {\n    val x = 1\n}");
/// ```
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let is_blank = |line: &str| line.trim().is_empty();

    let min_indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .filter(|(i, line)| !((*i == 0 || *i == last) && is_blank(line)))
        .map(|(_, line)| {
            if is_blank(line) {
                String::new()
            } else {
                line.chars().skip(min_indent).collect()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the wrapper bridging the plugin contract to a compiled script
///
/// The compiled script class may not be linkable when the wrapper compiles,
/// so the wrapper resolves it by name when the plugin is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperTemplate {
    /// Type of the value passed to `apply` and to the script constructor
    pub context_type: String,
    /// Wrapper file extension, without the dot
    pub extension: String,
}

impl Default for WrapperTemplate {
    fn default() -> Self {
        Self {
            context_type: DEFAULT_CONTEXT_TYPE.to_string(),
            extension: DEFAULT_WRAPPER_EXTENSION.to_string(),
        }
    }
}

impl WrapperTemplate {
    pub fn new(context_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            context_type: context_type.into(),
            extension: extension.into(),
        }
    }

    /// Wrapper source for one script, newline-terminated
    pub fn render(&self, implementation_class: &str, compiled_script_type: &str) -> String {
        let contract = PLUGIN_CONTRACT_TYPE;
        let target = &self.context_type;

        let mut source = trim_indent(&format!(
            r#"
            class {implementation_class} : {contract}<{target}> {{
                override fun apply(target: {target}) {{
                    Class
                        .forName("{compiled_script_type}")
                        .getDeclaredConstructor({target}::class.java)
                        .newInstance(target)
                }}
            }}
            "#
        ));
        source.push('\n');
        source
    }

    /// File name of the wrapper for `implementation_class`
    pub fn file_name(&self, implementation_class: &str) -> String {
        format!("{}.{}", implementation_class, self.extension)
    }
}
