pub mod creep_cluster;
