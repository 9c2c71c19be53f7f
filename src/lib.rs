// SPDX-License-Identifier: PMPL-1.0-or-later

//! transloco-check: translation completeness checking.
//!
//! Walks a tree of locale directories, treats one locale file as the
//! source of truth and reports:
//! 1. **Missing files**: a locale directory lacking one of the required
//!    locale files.
//! 2. **Missing keys**: a leaf key path of the reference document with
//!    no matching leaf path in a target document.
//!
//! [`scan::run`] returns a [`types::ScanReport`]; deciding what to print
//! and how to exit is left to the caller.

pub mod compare;
pub mod config;
pub mod document;
pub mod report;
pub mod scan;
pub mod types;
