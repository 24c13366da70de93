//! linear-classifiers: logistic-regression and linear-SVM classifiers
//! behind a uniform estimator interface.
//!
//! This crate provides two thin model wrappers (`LogisticClassifier`,
//! `SvmClassifier`) that delegate training and inference to the linfa
//! backend crates, plus dataset assembly, optional feature standardization,
//! evaluation metrics, and coefficient reporting.
//!
//! The design favors small, testable modules; the wrappers own parameter
//! marshaling and output shaping while the hard numerical work stays in the
//! backends.
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod preprocessing;
pub mod report;
pub mod stats;
