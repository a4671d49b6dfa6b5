pub mod bar;

mod axes_draw;
