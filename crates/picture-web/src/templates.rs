//! HTML pages, rendered with `maud`.
//!
//! Handlers pick a [`Template`] and fill in its data; the template knows how
//! to turn itself into a response.

use axum::response::{Html, IntoResponse, Response};
use maud::{html, Markup, DOCTYPE};
use picture_core::ImageEntry;

pub const SITE_TITLE: &str = "IN THE PICTURE";

/// A named page together with the data it renders.
#[derive(Debug)]
pub enum Template<'a> {
    /// `index.html`: every image, newest first.
    Gallery { images: &'a [ImageEntry] },
    /// `message.html`: a one-line message above the upload form.
    Message { message: &'a str },
    /// `preview.html`: a single image by name.
    Preview { name: &'a str },
}

impl Template<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Gallery { .. } => "index.html",
            Template::Message { .. } => "message.html",
            Template::Preview { .. } => "preview.html",
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            Template::Gallery { images } => render_gallery(images),
            Template::Message { message } => render_message(message),
            Template::Preview { name } => render_preview(name),
        }
    }
}

impl IntoResponse for Template<'_> {
    fn into_response(self) -> Response {
        tracing::trace!("rendering {}", self.name());
        Html(self.render().into_string()).into_response()
    }
}

/// Percent-encodes `name` for use as a single URL path segment.
pub fn path_segment(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header.site-header {
                    a.site-title href="/" { (SITE_TITLE) }
                    nav {
                        a href="/" { "Gallery" }
                        a href="/upload" { "Upload" }
                    }
                }
                main { (content) }
            }
        }
    }
}

fn render_gallery(images: &[ImageEntry]) -> Markup {
    let content = html! {
        @if images.is_empty() {
            p.empty { "No pictures yet. " a href="/upload" { "Upload one." } }
        } @else {
            div.image-grid {
                @for image in images {
                    @let segment = path_segment(image.file_name());
                    figure.image-card {
                        a href={ "/preview/" (segment) } {
                            img src={ "/download/" (segment) } alt=(image.file_name()) loading="lazy";
                        }
                        figcaption {
                            a href={ "/preview/" (segment) } { (image.file_name()) }
                            " "
                            a.download href={ "/download/" (segment) } { "Download" }
                        }
                    }
                }
            }
        }
    };
    base_document(SITE_TITLE, content)
}

fn render_message(message: &str) -> Markup {
    let content = html! {
        p.message { (message) }
        form.upload-form method="post" action="/upload" enctype="multipart/form-data" {
            input type="file" name="file" accept=".svg,.png,.jpg,.jpeg,.gif";
            button type="submit" { "Upload" }
        }
    };
    base_document(SITE_TITLE, content)
}

fn render_preview(name: &str) -> Markup {
    let segment = path_segment(name);
    let content = html! {
        figure.preview {
            img src={ "/download/" (segment) } alt=(name);
            figcaption { (name) }
        }
        p {
            a.download href={ "/download/" (segment) } { "Download" }
            " "
            a href="/" { "Back to gallery" }
        }
    };
    base_document(name, content)
}
