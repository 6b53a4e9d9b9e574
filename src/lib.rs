//! CPU scheduling simulation library.
//!
//! Simulates a single CPU running a batch of processes under one of three
//! classical scheduling disciplines, computing per-process completion,
//! waiting, and turnaround times. Instructional in scope: no real workloads,
//! no I/O devices, no priorities, no preemption beyond Round Robin's fixed
//! quantum.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`, `Slice`,
//!   `SimulationOutcome`
//! - **`validation`**: Input integrity checks (empty batch, zero burst,
//!   duplicate IDs, zero quantum)
//! - **`disciplines`**: The scheduling algorithms — `Fcfs`, `Sjn`,
//!   `RoundRobin` — behind the `Discipline` trait
//! - **`simulator`**: The request/response entry point (`simulate`), the
//!   metric calculator, and batch KPIs
//! - **`workload`**: Random batch generation for experiments
//!
//! # Architecture
//!
//! The crate is a pure request/response core: a caller builds a batch of
//! [`models::Process`] records, picks an [`simulator::Algorithm`], and calls
//! [`simulator::simulate`]. Inputs are never mutated — every run returns a
//! freshly annotated [`models::SimulationOutcome`], so one batch can be
//! replayed under each discipline. Console I/O and result tables belong to
//! the surrounding adapter, not to this crate.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"

pub mod disciplines;
pub mod models;
pub mod simulator;
pub mod validation;
pub mod workload;
