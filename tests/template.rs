use automat::{values, ErrorKind, Template};

#[test]
fn template_from_comment_inline() -> automat::Result<()> {
    let template = Template::from_comment("/*Hello, ${0}!*/")?;
    assert_eq!(template.resolve(), "Hello, ${0}!");
    Ok(())
}

#[test]
fn template_from_comment_multiline() -> automat::Result<()> {
    let source = r#"
        /*
            <li class="item">
                %{0}
            </li>
        */
    "#;
    let template = Template::from_comment(source)?;
    let result = automat::format(template, &values!["<new>"]);
    assert_eq!(
        result,
        "<li class=\"item\">\n                &lt;new&gt;\n            </li>"
    );
    Ok(())
}

#[test]
fn template_from_comment_err_not_a_comment() {
    let err = Template::from_comment("  <p>x</p>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TemplateExtraction);
    assert_eq!(
        format!("{:#}", err),
        "
   |
 1 |   <p>x</p>
   |   ^ expected `/*`
"
    );
}

#[test]
fn template_from_comment_err_unclosed() {
    let err = Template::from_comment("/* Hello").unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "
   |
 1 | /* Hello
   | ^^ unclosed comment
"
    );
}

#[test]
fn template_from_comment_err_trailing_text() {
    let err = Template::from_comment("/* a */ b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected text after comment between bytes 8 and 9"
    );
}

#[test]
fn template_from_comment_err_multiline_points_at_trailing_line() {
    let err = Template::from_comment("/*\n  a\n*/\nfn").unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "
   |
 4 | fn
   | ^^ unexpected text after comment
"
    );
}

#[test]
fn template_from_comment_err_empty_body() {
    let err = Template::from_comment("/*   */").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TemplateExtraction);
    assert_eq!(
        err.to_string(),
        "comment template is empty between bytes 0 and 7"
    );
}

#[test]
fn template_from_comment_err_empty_source() {
    let err = Template::from_comment("   ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected comment template, found empty source between bytes 3 and 3"
    );
}

#[test]
fn template_from_comment_include_str_style() -> automat::Result<()> {
    const SOURCE: &str = "/* <b>${0}</b> */\n";
    let template = Template::from_comment(SOURCE)?;
    assert_eq!(automat::format(template, &values!["x"]), "<b>x</b>");
    Ok(())
}

#[test]
fn template_accessor_called_on_each_resolve() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let template = Template::from_fn(|| {
        calls.set(calls.get() + 1);
        String::from("${0}")
    });
    assert_eq!(template.resolve(), "${0}");
    assert_eq!(template.resolve(), "${0}");
    assert_eq!(calls.get(), 2);
}

#[test]
fn template_debug() {
    assert_eq!(format!("{:?}", Template::from("x")), "Template(\"x\")");
    assert_eq!(
        format!("{:?}", Template::from_fn(String::new)),
        "Template(\"<fn>\")"
    );
}
