mod helpers;

mod buffer;
mod pixel;
