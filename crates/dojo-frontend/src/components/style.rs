//! Tailwind class sets shared across screens.

use dojo::data::{Difficulty, SubmissionStatus};

pub const CARD_CLASSES: &str = "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl p-6 shadow-sm";
pub const TEXT_PRIMARY: &str = "text-gray-900 dark:text-gray-100";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-green-500";
pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-green-600 hover:bg-green-700 text-white font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-green-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors";
pub const SECONDARY_BUTTON: &str = "px-4 py-2 bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-800 dark:text-gray-200 font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-gray-400 transition-colors";

pub fn difficulty_badge(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        Difficulty::Medium => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200",
        Difficulty::Hard => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        Difficulty::Other(_) => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
    }
}

/// Failed and errored submissions share the failing treatment; only the label differs.
pub fn submission_panel(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Passed => "bg-green-50 border-green-200 text-green-800 dark:bg-green-900/30 dark:border-green-700 dark:text-green-200",
        SubmissionStatus::Failed | SubmissionStatus::Error => "bg-red-50 border-red-200 text-red-800 dark:bg-red-900/30 dark:border-red-700 dark:text-red-200",
    }
}
