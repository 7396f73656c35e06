/// Module for the reduction from R1CS to SAP.
pub mod r1cs_to_sap;
