mod render;
mod walk;
