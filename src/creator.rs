//! The public entry point: lay out content, pick the output path, render and write.
//!
//! Inputs are plain structs that also deserialize from JSON with the field names of
//! the job file the command line tool reads:
//!
//! ```json
//! {
//!   "fileProperties": { "Directory": "/tmp", "FileName": "report.pdf", "FileExistsAction": "Rename" },
//!   "documentSettings": { "Title": "Report", "Size": "A4", "Orientation": "Portrait" },
//!   "content": [ { "ContentType": "Paragraph", "Text": "Hello" } ],
//!   "options": { "ThrowErrorOnFailure": true }
//! }
//! ```

use crate::assemble::assemble;
use crate::element::{ContentElement, ElementDescriptor};
use crate::error::Result;
use crate::identity::{run_as, Credentials, IdentityProvider, LogonMode, SameIdentity};
use crate::info::Info;
use crate::layout::Margins;
use crate::output::{resolve_output_path, ConflictPolicy, FileSystem, LocalFileSystem};
use crate::page::PageGeometry;
use crate::pagesize::{resolve, Orientation, PaperSize};
use crate::render::{PdfRenderer, RenderOptions, Renderer};
use crate::vocab;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the document goes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileProperties {
    pub directory: PathBuf,
    pub file_name: String,
    #[serde(alias = "FileExistsAction", deserialize_with = "vocab::deserialize")]
    pub conflict_policy: ConflictPolicy,
    /// Show text in the full single-byte code page rather than ASCII only
    #[serde(alias = "Unicode")]
    pub use_wide_character_encoding: bool,
}

impl Default for FileProperties {
    fn default() -> Self {
        FileProperties {
            directory: PathBuf::from("."),
            file_name: "example_file.pdf".to_string(),
            conflict_policy: ConflictPolicy::Error,
            use_wide_character_encoding: true,
        }
    }
}

/// Metadata and page setup shared by every section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentSettings {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(alias = "Size", deserialize_with = "vocab::deserialize")]
    pub page_size: PaperSize,
    #[serde(deserialize_with = "vocab::deserialize")]
    pub orientation: Orientation,
    pub margin_left_in_cm: f32,
    pub margin_top_in_cm: f32,
    pub margin_right_in_cm: f32,
    pub margin_bottom_in_cm: f32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        DocumentSettings {
            title: None,
            author: None,
            page_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_left_in_cm: 2.5,
            margin_top_in_cm: 2.0,
            margin_right_in_cm: 2.5,
            margin_bottom_in_cm: 2.0,
        }
    }
}

impl DocumentSettings {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            size: resolve(self.page_size, self.orientation),
            orientation: self.orientation,
            margins: Margins::from_cm(
                self.margin_left_in_cm,
                self.margin_top_in_cm,
                self.margin_right_in_cm,
                self.margin_bottom_in_cm,
            ),
        }
    }

    pub fn info(&self) -> Info {
        Info::from_settings(self.title.as_deref(), self.author.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Options {
    /// Write the file as `username` instead of the current user
    #[serde(alias = "UseGivenCredentials")]
    pub use_alternate_credentials: bool,
    /// `domain\user`
    #[serde(alias = "UserName")]
    pub username: Option<String>,
    pub password: Option<String>,
    /// Return failures as errors; otherwise they become an unsuccessful [`Output`]
    #[serde(alias = "ThrowErrorOnFailure")]
    pub raise_on_failure: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            use_alternate_credentials: false,
            username: None,
            password: None,
            raise_on_failure: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub success: bool,
    /// The path the document was written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<PathBuf>,
}

/// Everything one document needs, as read from a job file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub file_properties: FileProperties,
    pub document_settings: DocumentSettings,
    #[serde(alias = "contents")]
    pub content: Vec<ElementDescriptor>,
    pub options: Options,
}

impl Job {
    pub fn from_json(text: &str) -> Result<Job> {
        Ok(serde_json::from_str(text)?)
    }

    /// The job's content as typed elements
    pub fn elements(&self) -> Result<Vec<ContentElement>> {
        self.content
            .iter()
            .cloned()
            .map(ContentElement::try_from)
            .collect()
    }
}

/// Creates documents through a file system, a renderer and an identity provider.
/// The default works on the local disk, writes PDF and never switches identity.
#[derive(Debug, Default, Clone)]
pub struct DocumentCreator<F = LocalFileSystem, R = PdfRenderer, I = SameIdentity> {
    pub fs: F,
    pub renderer: R,
    pub identity: I,
}

impl<F: FileSystem, R: Renderer, I: IdentityProvider> DocumentCreator<F, R, I> {
    pub fn new(fs: F, renderer: R, identity: I) -> Self {
        DocumentCreator {
            fs,
            renderer,
            identity,
        }
    }

    /// Lay out `content`, render it and write it to the path chosen for `file`.
    ///
    /// Nothing is written unless every step succeeds. With
    /// [`raise_on_failure`](Options::raise_on_failure) unset, a failure is logged and
    /// reported as `Output { success: false, .. }` instead of an error.
    pub fn create(
        &self,
        file: &FileProperties,
        settings: &DocumentSettings,
        content: &[ContentElement],
        options: &Options,
    ) -> Result<Output> {
        match self.try_create(file, settings, content, options) {
            Ok(path) => Ok(Output {
                success: true,
                file_name: Some(path),
            }),
            Err(e) if options.raise_on_failure => Err(e),
            Err(e) => {
                log::warn!("document creation failed: {e}");
                Ok(Output {
                    success: false,
                    file_name: None,
                })
            }
        }
    }

    /// Run a job read from a job file. Content that does not convert to elements
    /// fails the same way as any other step.
    pub fn run(&self, job: &Job) -> Result<Output> {
        match job.elements() {
            Ok(content) => self.create(
                &job.file_properties,
                &job.document_settings,
                &content,
                &job.options,
            ),
            Err(e) if job.options.raise_on_failure => Err(e),
            Err(e) => {
                log::warn!("document creation failed: {e}");
                Ok(Output {
                    success: false,
                    file_name: None,
                })
            }
        }
    }

    fn try_create(
        &self,
        file: &FileProperties,
        settings: &DocumentSettings,
        content: &[ContentElement],
        options: &Options,
    ) -> Result<PathBuf> {
        let document = assemble(&self.fs, settings.info(), settings.geometry(), content)?;
        let path = resolve_output_path(
            &self.fs,
            &file.directory,
            &file.file_name,
            file.conflict_policy,
        )?;
        let bytes = self.renderer.render(
            document,
            &RenderOptions {
                wide_characters: file.use_wide_character_encoding,
            },
        )?;

        if options.use_alternate_credentials {
            let credentials = Credentials::parse(
                options.username.as_deref().unwrap_or_default(),
                options.password.as_deref().unwrap_or_default(),
            )?;
            run_as(
                &self.identity,
                &credentials,
                LogonMode::NewCredentials,
                || self.write(&path, &bytes),
            )?;
        } else {
            self.write(&path, &bytes)?;
        }
        Ok(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.fs.write_bytes(path, bytes)?;
        log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Create a document on the local disk with the bundled PDF renderer.
pub fn create_document(
    file: &FileProperties,
    settings: &DocumentSettings,
    content: &[ContentElement],
    options: &Options,
) -> Result<Output> {
    let creator: DocumentCreator = DocumentCreator::default();
    creator.create(file, settings, content, options)
}
