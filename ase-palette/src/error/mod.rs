/*!
 This module defines the errors that can happen when decoding `ASE` data.
*/

pub mod ase;
