/// Substitutes `{name}` placeholders in every argument of a helper template.
///
/// Unknown placeholders are left as they are.
pub fn expand_argv(template: &[String], vars: &[(&str, &str)]) -> Vec<String> {
    template
        .iter()
        .map(|arg| {
            vars.iter().fold(arg.clone(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
        })
        .collect()
}
