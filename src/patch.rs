//! HTML patching for the marker script element.
//!
//! Pure over its inputs: no file I/O here, so idempotence and stability are
//! testable without touching a filesystem. Bytes outside the marker element
//! pass through the rewriter untouched, which makes a patched document a
//! fixed point of [`patch_document`].

use anyhow::{Context, Result};
use lol_html::html_content::ContentType;
use lol_html::{element, HtmlRewriter, Settings};
use std::cell::Cell;
use std::rc::Rc;

use crate::paths::ARTIFACT_FILE_NAME;

/// Id of the marker script element this tool owns inside the document head.
pub const MARKER_ID: &str = "react-dotenv";

/// Patch the marker script reference into an HTML document.
///
/// An existing marker, wherever it sits in the document, gets its `src`
/// updated to `{base_path}/env.js`; only when no marker exists anywhere is a
/// new one appended as the last child of `<head>`.
pub fn patch_document(html: &[u8], base_path: &str) -> Result<Vec<u8>> {
    let src = format!("{base_path}/{ARTIFACT_FILE_NAME}");
    let mut patched = Vec::with_capacity(html.len() + 96);

    let update_marker = {
        let src = src.clone();
        element!("script#react-dotenv", move |el| {
            el.set_attribute("src", &src)?;
            Ok(())
        })
    };
    let mut handlers = vec![update_marker];

    // The append decision needs the whole document: a marker may sit past
    // </head>, and it must still suppress the append.
    if !marker_exists(html)? {
        handlers.push(element!("head", move |el| {
            let tag = format!("\t<script id=\"{MARKER_ID}\" src=\"{src}\"></script>\n\t");
            if let Some(handlers) = el.end_tag_handlers() {
                handlers.push(Box::new(move |end| {
                    end.before(&tag, ContentType::Html);
                    Ok(())
                }));
            }
            Ok(())
        }));
    }

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: handlers,
            ..Settings::default()
        },
        |chunk: &[u8]| patched.extend_from_slice(chunk),
    );
    rewriter.write(html).context("rewrite document")?;
    rewriter.end().context("finish document rewrite")?;

    Ok(patched)
}

/// Scan pass: does the document already carry a marker element anywhere?
fn marker_exists(html: &[u8]) -> Result<bool> {
    let found = Rc::new(Cell::new(false));
    let spot_marker = {
        let found = Rc::clone(&found);
        element!("script#react-dotenv", move |_el| {
            found.set(true);
            Ok(())
        })
    };

    let mut scanner = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![spot_marker],
            ..Settings::default()
        },
        |_chunk: &[u8]| {},
    );
    scanner.write(html).context("scan document")?;
    scanner.end().context("finish document scan")?;

    Ok(found.get())
}
