//! Blog page rendering markdown posts.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use pulldown_cmark::{Parser, html};

/// A blog post authored in markdown.
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub body: &'static str,
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "performance-budgets",
        title: "Performance budgets are a design tool",
        date: "2026-05-11",
        body: "A budget is not a constraint you suffer, it's a brief you design to.\n\n\
               When a page has a number attached — *200 KB, interactive in two seconds* — \
               every decision gets sharper. You stop asking \"would a carousel be nice?\" \
               and start asking what it costs.",
    },
    BlogPost {
        slug: "small-sites-big-care",
        title: "Small sites deserve big care",
        date: "2026-02-03",
        body: "Most of my favorite work is under ten pages.\n\n\
               A small site is a promise: everything on it earned its place. \
               That only holds if someone keeps saying no.",
    },
];

/// Render a post body to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="blog-page">
            <h1>"Blog"</h1>
            {POSTS
                .iter()
                .map(|post| {
                    view! {
                        <article class="blog-post" id=post.slug>
                            <h2 class="blog-post__title">{post.title}</h2>
                            <time class="blog-post__date">{post.date}</time>
                            <div class="blog-post__body" inner_html=render_markdown(post.body)></div>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
