#[cfg(test)]
pub const OCTOPRESS_POST: &str = r#"---
layout: post
title: "Hello, Ghost"
date: 2013-05-01 10:00
comments: true
categories: [Rust, Blogging]
---

Moving from Octopress to Ghost.

<!-- more -->

The rest of the post.
"#;

#[cfg(test)]
pub const POST_WITH_IMAGE: &str = "---
layout: post
title: Cats
slug: '  cats-and-more  '
date: 2013-06-10 08:30:00
changed: 2013-06-12 09:00:00
categories: Pets
tags:
  - cats
  - Rust
---\n   \nLook at this:\n\n{% img /images/x.png 100 50 A cat %}\n   \n\n";

#[cfg(test)]
pub const POST_WITHOUT_DATE: &str = "---
title: Undated
slug:
tags: Rust
---
Body without a date.
";
