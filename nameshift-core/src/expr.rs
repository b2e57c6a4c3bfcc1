use crate::error::{Error, Result};
use crate::transform::NameTransform;
use regex::RegexBuilder;
use std::collections::HashMap;

/// A named string operation provided by a module. Operations are pure and
/// restricted to string rewriting; they never see the filesystem.
type OpFn = fn(&str) -> String;

/// Registry of operation modules loadable by name.
///
/// Substitution syntax (`s///`) is always available; bare operation names in
/// an expression resolve against whatever modules have been loaded.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    ops: HashMap<&'static str, OpFn>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a built-in module, making its operations available to
    /// subsequently compiled expressions.
    pub fn load(&mut self, module: &str) -> Result<()> {
        let ops: &[(&'static str, OpFn)] = match module {
            "case" => &[("lower", op_lower), ("upper", op_upper), ("title", op_title)],
            "text" => &[
                ("trim", op_trim),
                ("squeeze", op_squeeze),
                ("sanitize", op_sanitize),
            ],
            _ => return Err(Error::UnknownModule(module.to_string())),
        };
        for &(name, op) in ops {
            self.ops.insert(name, op);
        }
        Ok(())
    }

    fn lookup(&self, op: &str) -> Option<OpFn> {
        self.ops.get(op).copied()
    }
}

fn op_lower(name: &str) -> String {
    name.to_lowercase()
}

fn op_upper(name: &str) -> String {
    name.to_uppercase()
}

fn op_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

fn op_trim(name: &str) -> String {
    name.trim().to_string()
}

fn op_squeeze(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn op_sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[derive(Debug)]
enum Step {
    Subst {
        pattern: regex::Regex,
        template: String,
        global: bool,
    },
    Op(OpFn),
}

/// An ordered list of transform expressions compiled against a module
/// registry. Applying it rewrites one name; the sequence number is supplied
/// by the pipeline and reachable from substitution templates as `{n}`.
#[derive(Debug)]
pub struct CompiledTransform {
    steps: Vec<Step>,
}

impl CompiledTransform {
    /// Compile expressions in order. Unknown operations and malformed
    /// substitutions fail here, before any name is processed.
    pub fn compile(exprs: &[String], registry: &ModuleRegistry) -> Result<Self> {
        let mut steps = Vec::with_capacity(exprs.len());
        for expr in exprs {
            steps.push(parse_expr(expr, registry)?);
        }
        Ok(Self { steps })
    }

    pub fn apply(&self, seq: u64, name: &str) -> Result<String> {
        let mut current = name.to_string();
        for step in &self.steps {
            current = match step {
                Step::Subst {
                    pattern,
                    template,
                    global,
                } => {
                    let template = template.replace("{n}", &seq.to_string());
                    if *global {
                        pattern.replace_all(&current, template.as_str()).into_owned()
                    } else {
                        pattern.replace(&current, template.as_str()).into_owned()
                    }
                },
                Step::Op(op) => op(&current),
            };
        }
        Ok(current)
    }
}

impl NameTransform for CompiledTransform {
    fn transform(&mut self, seq: u64, name: &str) -> Result<String> {
        self.apply(seq, name)
    }
}

fn parse_expr(expr: &str, registry: &ModuleRegistry) -> Result<Step> {
    let trimmed = expr.trim();
    let mut chars = trimmed.chars();

    if let (Some('s'), Some(delim)) = (chars.next(), chars.clone().next()) {
        if !delim.is_alphanumeric() && delim != '_' {
            chars.next();
            return parse_subst(trimmed, chars.as_str(), delim);
        }
    }

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return registry
            .lookup(trimmed)
            .map(Step::Op)
            .ok_or_else(|| {
                Error::bad_expression(expr, "unknown operation (missing a -M module?)")
            });
    }

    Err(Error::bad_expression(
        expr,
        "expected s<delim>PATTERN<delim>TEMPLATE<delim>[gi] or an operation name",
    ))
}

/// Split the substitution body on its delimiter, honoring backslash escapes
/// of the delimiter only; all other backslashes belong to the regex.
fn parse_subst(expr: &str, body: &str, delim: char) -> Result<Step> {
    let mut parts = vec![String::new()];
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) if next == delim => parts.last_mut().unwrap().push(delim),
                Some(next) => {
                    let part = parts.last_mut().unwrap();
                    part.push('\\');
                    part.push(next);
                },
                None => parts.last_mut().unwrap().push('\\'),
            }
        } else if c == delim {
            parts.push(String::new());
        } else {
            parts.last_mut().unwrap().push(c);
        }
    }

    if parts.len() != 3 {
        return Err(Error::bad_expression(
            expr,
            format!("expected three '{delim}'-delimited fields"),
        ));
    }

    let flags = &parts[2];
    let mut global = false;
    let mut case_insensitive = false;
    for flag in flags.chars() {
        match flag {
            'g' => global = true,
            'i' => case_insensitive = true,
            other => {
                return Err(Error::bad_expression(expr, format!("unknown flag '{other}'")));
            },
        }
    }

    let pattern = RegexBuilder::new(&parts[0])
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|err| Error::bad_expression(expr, err.to_string()))?;

    Ok(Step::Subst {
        pattern,
        template: parts[1].clone(),
        global,
    })
}
