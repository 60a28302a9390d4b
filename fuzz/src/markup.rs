#![no_main]

use automat::markup::{Document, Tree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut tree = Tree::new();
    let el = tree.create_element("div");
    tree.set_inner_html(&el, data).unwrap();
    let markup = tree.inner_html(&el);

    // Setting the same markup again gives the same nodes.
    tree.set_inner_html(&el, data).unwrap();
    assert_eq!(tree.inner_html(&el), markup);
});
