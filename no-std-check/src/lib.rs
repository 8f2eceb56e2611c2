#![no_std]
extern crate pix_brcode;
