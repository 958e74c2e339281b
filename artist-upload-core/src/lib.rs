#![doc = "artist-upload-core: core logic library for artist-upload."]

//! This crate contains the data model, spreadsheet reading, row mapping and
//! the upload pipeline for artist-upload. The HTTP transport lives in the CLI
//! crate and plugs in through [`contract::ArtistApi`].
//!
//! # Usage
//! Build a [`reader::ExcelArtistReader`], hand it together with an
//! [`contract::ArtistApi`] implementation to [`upload::upload_artists`], and
//! print the returned [`report::UploadResult`].

pub mod config;
pub mod contract;
pub mod error;
pub mod mapping;
pub mod reader;
pub mod record;
pub mod report;
pub mod upload;
