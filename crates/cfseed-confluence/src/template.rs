//! Storage-format body for provisioned pages.
//!
//! Every page gets the same skeleton: heading, excerpt macro, a two-column
//! layout with placeholder content on the left and a table of contents on
//! the right, then an "Additional Information" section.

use quick_xml::escape::escape;

/// Name of the excerpt macro block, referenced by excerpt-include macros.
pub const EXCERPT_NAME: &str = "page-focus";

/// Render the section page body for `title`.
///
/// The title is XML-escaped before insertion, so titles like
/// `Help & Support` still produce well-formed storage markup.
#[must_use]
pub fn section_page(title: &str) -> String {
    let title = escape(title);
    format!(
        r#"<h1>{title}</h1>
<p>This is the {title} section.</p>
<ac:structured-macro ac:name="excerpt">
  <ac:parameter ac:name="name">{EXCERPT_NAME}</ac:parameter>
  <ac:rich-text-body>
    <p>{title} content preview</p>
  </ac:rich-text-body>
</ac:structured-macro>
<ac:layout>
  <ac:layout-section ac:type="two_equal">
    <ac:layout-cell>
      <h2>Content</h2>
      <p>This is where the main content of the {title} will go.</p>
      <h3 id="section1">Section 1</h3>
      <p>Details about section 1...</p>
      <h3 id="section2">Section 2</h3>
      <p>Details about section 2...</p>
    </ac:layout-cell>
    <ac:layout-cell>
      <h3>On This Page</h3>
      <ac:structured-macro ac:name="toc">
        <ac:parameter ac:name="style">square</ac:parameter>
        <ac:parameter ac:name="maxLevel">3</ac:parameter>
        <ac:parameter ac:name="minLevel">2</ac:parameter>
      </ac:structured-macro>
    </ac:layout-cell>
  </ac:layout-section>
</ac:layout>
<h2>Additional Information</h2>
<p>Additional content or instructions can go here.</p>
"#
    )
}
