/// Replaces every `{{name}}` whose name is in `values`, leaving unknown tokens as they are.
///
/// This is plain text substitution: values are inserted unescaped, so the
/// result is only valid JSON if the template author made it so.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                rendered.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                rendered.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values() -> Vec<(&'static str, String)> {
        vec![
            ("title", "Deploy".to_string()),
            ("repository", "o/r".to_string()),
        ]
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let rendered = render("{{title}} {{title}} in {{repository}}", &values());
        assert_eq!(rendered, "Deploy Deploy in o/r");
    }

    #[test]
    fn test_unknown_placeholders_are_untouched() {
        let rendered = render(r#"{"a":"{{nope}}","b":"{{title}}"}"#, &values());
        assert_eq!(rendered, r#"{"a":"{{nope}}","b":"Deploy"}"#);
    }

    #[test]
    fn test_unterminated_and_nested_braces() {
        assert_eq!(render("{{title", &values()), "{{title");
        assert_eq!(render("{{{title}}}", &values()), "{Deploy}");
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let values = vec![
            ("title", "{{repository}}".to_string()),
            ("repository", "o/r".to_string()),
        ];
        assert_eq!(render("{{title}}", &values), "{{repository}}");
    }

    proptest! {
        #[test]
        fn prop_text_without_braces_is_unchanged(text in "[^{}]*") {
            prop_assert_eq!(render(&text, &values()), text);
        }

        #[test]
        fn prop_unknown_names_survive(name in "[a-z_]{1,12}") {
            prop_assume!(name != "title" && name != "repository");
            let template = format!("{{{{{}}}}}", name);
            prop_assert_eq!(render(&template, &values()), template);
        }
    }
}
