// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Media MIME types keyed by file extension
//!
//! Only media formats are mapped. Anything else gets no mapping and the relay
//! falls back to [`DEFAULT_CONTENT_TYPE`].

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::uri::ResourceUri;

/// Content type used when a resource has no media mapping
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

lazy_static! {
    static ref MEDIA_MIMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(".aac", "audio/x-aac");
        m.insert(".avi", "video/x-msvideo");
        m.insert(".bmp", "image/bmp");
        m.insert(".flv", "video/x-flv");
        m.insert(".gif", "image/gif");
        m.insert(".ico", "image/x-icon");
        m.insert(".jpe", "image/jpg");
        m.insert(".jpeg", "image/jpg");
        m.insert(".jpg", "image/jpg");
        m.insert(".m1v", "video/mpeg");
        m.insert(".m2a", "audio/mpeg");
        m.insert(".m2v", "video/mpeg");
        m.insert(".m3a", "audio/mpeg");
        m.insert(".mid", "audio/midi");
        m.insert(".midi", "audio/midi");
        m.insert(".mk3d", "video/x-matroska");
        m.insert(".mks", "video/x-matroska");
        m.insert(".mkv", "video/x-matroska");
        m.insert(".mov", "video/quicktime");
        m.insert(".movie", "video/x-sgi-movie");
        m.insert(".mp2", "audio/mpeg");
        m.insert(".mp2a", "audio/mpeg");
        m.insert(".mp3", "audio/mpeg");
        m.insert(".mp4", "video/mp4");
        m.insert(".mp4a", "audio/mp4");
        m.insert(".mp4v", "video/mp4");
        m.insert(".mpe", "video/mpeg");
        m.insert(".mpeg", "video/mpeg");
        m.insert(".mpg", "video/mpeg");
        m.insert(".mpg4", "video/mp4");
        m.insert(".mpga", "audio/mpeg");
        m.insert(".oga", "audio/ogg");
        m.insert(".ogg", "audio/ogg");
        m.insert(".ogv", "video/ogg");
        m.insert(".png", "image/png");
        m.insert(".psd", "image/vnd.adobe.photoshop");
        m.insert(".qt", "video/quicktime");
        m.insert(".spx", "audio/ogg");
        m.insert(".svg", "image/svg+xml");
        m.insert(".tga", "image/x-tga");
        m.insert(".tif", "image/tiff");
        m.insert(".tiff", "image/tiff");
        m.insert(".wav", "audio/x-wav");
        m.insert(".webm", "video/webm");
        m.insert(".webp", "image/webp");
        m.insert(".wma", "audio/x-ms-wma");
        m.insert(".wmv", "video/x-ms-wmv");
        m.insert(".woff", "application/font-woff");
        m
    };
}

/// Media MIME type for an extension such as `.png` (case-insensitive)
pub fn media_mime_for_extension(extension: &str) -> Option<&'static str> {
    MEDIA_MIMES.get(extension.to_lowercase().as_str()).copied()
}

/// Media MIME type for the resource's path, if it has a mapped extension
pub fn media_mime(uri: &ResourceUri) -> Option<&'static str> {
    uri.extension()
        .and_then(|ext| media_mime_for_extension(&ext))
}

/// Content type for a path given as a string
pub fn content_type_for_path(path: &str) -> &'static str {
    let basename = path.rsplit(['/', '\\']).next().unwrap_or("");
    match basename.rfind('.') {
        Some(idx) if idx > 0 => {
            media_mime_for_extension(&basename[idx..]).unwrap_or(DEFAULT_CONTENT_TYPE)
        }
        _ => DEFAULT_CONTENT_TYPE,
    }
}
