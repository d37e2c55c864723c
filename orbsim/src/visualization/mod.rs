pub mod orbsim_vis2d;
