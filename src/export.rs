use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::post::Post;
use crate::tag_registry::{PostTagRelation, Tag};

pub const EXPORT_VENDOR: &str = "ghost_octopress_converter";
pub const EXPORT_VERSION: &str = "002";

#[derive(Debug, Serialize)]
pub struct ExportMeta {
    pub exported_on: i64,
    pub vendor: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExportData {
    pub posts: Vec<Post>,
    pub tags: Vec<Tag>,
    pub posts_tags: Vec<PostTagRelation>,
}

/// The Ghost import file.
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub meta: ExportMeta,
    pub data: ExportData,
}

impl ExportDocument {
    pub fn new(data: ExportData) -> ExportDocument {
        Self::exported_on(data, Utc::now().timestamp_millis())
    }

    pub fn exported_on(data: ExportData, exported_on: i64) -> ExportDocument {
        ExportDocument {
            meta: ExportMeta {
                exported_on,
                vendor: EXPORT_VENDOR,
                version: EXPORT_VERSION,
            },
            data,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn write_to(&self, out_file: &Path, pretty: bool) -> Result<()> {
        let write_err = |source: io::Error| ConvertError::Write {
            path: out_file.to_path_buf(),
            source,
        };

        let json = self.to_json(pretty).map_err(|e| write_err(e.into()))?;
        let file = File::create(out_file).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes()).map_err(write_err)?;
        writer.flush().map_err(write_err)
    }
}
