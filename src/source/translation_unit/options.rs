//! Translation-unit parse flags

use bitflags::bitflags;
use clang_sys::*;
use serde::{Deserialize, Serialize};

bitflags! {
    /// `CXTranslationUnit_*` flags passed to `clang_parseTranslationUnit2`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TranslationUnitFlags: i32 {
        const DETAILED_PREPROCESSING_RECORD = CXTranslationUnit_DetailedPreprocessingRecord;
        const INCOMPLETE = CXTranslationUnit_Incomplete;
        const PRECOMPILED_PREAMBLE = CXTranslationUnit_PrecompiledPreamble;
        const CACHE_COMPLETION_RESULTS = CXTranslationUnit_CacheCompletionResults;
        const FOR_SERIALIZATION = CXTranslationUnit_ForSerialization;
        const CXX_CHAINED_PCH = CXTranslationUnit_CXXChainedPCH;
        const SKIP_FUNCTION_BODIES = CXTranslationUnit_SkipFunctionBodies;
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION =
            CXTranslationUnit_IncludeBriefCommentsInCodeCompletion;
    }
}

impl Default for TranslationUnitFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single named parse option, as written in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationUnitOption {
    DetailedPreprocessorRecord,
    Incomplete,
    PrecompiledPreamble,
    CacheCompletionResults,
    ForSerialization,
    ChainedPch,
    SkipFunctionBodies,
    IncludeBriefCommentsInCodeCompletion,
}

impl TranslationUnitOption {
    pub fn flag(self) -> TranslationUnitFlags {
        match self {
            Self::DetailedPreprocessorRecord => TranslationUnitFlags::DETAILED_PREPROCESSING_RECORD,
            Self::Incomplete => TranslationUnitFlags::INCOMPLETE,
            Self::PrecompiledPreamble => TranslationUnitFlags::PRECOMPILED_PREAMBLE,
            Self::CacheCompletionResults => TranslationUnitFlags::CACHE_COMPLETION_RESULTS,
            Self::ForSerialization => TranslationUnitFlags::FOR_SERIALIZATION,
            Self::ChainedPch => TranslationUnitFlags::CXX_CHAINED_PCH,
            Self::SkipFunctionBodies => TranslationUnitFlags::SKIP_FUNCTION_BODIES,
            Self::IncludeBriefCommentsInCodeCompletion => {
                TranslationUnitFlags::INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION
            }
        }
    }
}

/// Chainable builder for translation-unit flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TUOptionsBuilder {
    flags: TranslationUnitFlags,
}

impl TUOptionsBuilder {
    pub fn new() -> TUOptionsBuilder {
        TUOptionsBuilder::default()
    }

    pub fn with(&mut self, option: TranslationUnitOption) -> &mut TUOptionsBuilder {
        self.flags |= option.flag();
        self
    }

    pub fn detailed_preprocessor_record(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::DetailedPreprocessorRecord)
    }

    pub fn incomplete(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::Incomplete)
    }

    pub fn precompiled_preamble(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::PrecompiledPreamble)
    }

    pub fn cache_completion_results(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::CacheCompletionResults)
    }

    pub fn for_serialization(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::ForSerialization)
    }

    pub fn chained_pch(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::ChainedPch)
    }

    pub fn skip_function_bodies(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::SkipFunctionBodies)
    }

    pub fn include_brief_comments_in_code_completion(&mut self) -> &mut TUOptionsBuilder {
        self.with(TranslationUnitOption::IncludeBriefCommentsInCodeCompletion)
    }

    pub fn flags(&self) -> TranslationUnitFlags {
        self.flags
    }

    pub fn build(&self) -> i32 {
        self.flags.bits()
    }
}

impl FromIterator<TranslationUnitOption> for TUOptionsBuilder {
    fn from_iter<I: IntoIterator<Item = TranslationUnitOption>>(iter: I) -> Self {
        let mut builder = TUOptionsBuilder::new();
        for option in iter {
            builder.with(option);
        }
        builder
    }
}
