//! Starter content for new posts.

/// HTML the editor opens with when composing a new post.
pub const DEFAULT_CONTENT: &str = "\
<h1>Headline</h1>
<p>Write the story here. Use <strong>bold</strong>, <em>italics</em> and
<a href=\"https://example.com\">links</a> as needed.</p>
<ul>
  <li>First point</li>
  <li>Second point</li>
</ul>
";
