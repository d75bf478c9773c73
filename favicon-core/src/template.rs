/// Replaces each `{key}` in `template` with its value. Braces that don't name a
/// key, like CSS rule blocks, are left untouched.
pub fn template<K: AsRef<str>>(template: &str, context: &[(K, String)]) -> String {
    let mut templated = template.to_owned();
    for (key, value) in context {
        let pattern = format!("{{{}}}", key.as_ref());
        templated = templated.replace(&pattern, value);
    }
    templated
}
