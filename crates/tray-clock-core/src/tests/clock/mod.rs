mod formatter;
mod timezone;
