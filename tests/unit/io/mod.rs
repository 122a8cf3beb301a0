mod bitmap;
