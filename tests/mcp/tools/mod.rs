mod missing;
mod translations;
